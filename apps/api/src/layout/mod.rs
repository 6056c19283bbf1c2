// Preview pagination model.
// Computes simulated A4 page boundaries for the continuously-flowing
// preview. Real print pagination belongs to the external renderers.

pub mod handlers;
pub mod pagination;

pub use pagination::{page_boundaries, PageGeometry};
