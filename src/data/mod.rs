//! Static content: site constants, navigation and the partner list.

pub mod navigation;
pub mod partners;
pub mod site;
