//! Section renderers, one per block kind
//!
//! Each renderer maps a block record to a [`View`](crate::ui::View) built
//! from the layout primitives. Renderers are pure: a missing optional field
//! drops its fragment and never fails.

mod benefits;
mod cta;
mod features;
mod hero;
mod leadership;
mod logos;
mod products;
mod stats;

pub use benefits::benefit_list;
pub use cta::cta;
pub use features::{feature, feature_list};
pub use hero::{about_hero, hero};
pub use leadership::leadership;
pub use logos::{about_logo_list, logo_item, logo_list};
pub use products::product_list;
pub use stats::{about_stat_list, stat_list};
