//! Pagination model — computes where simulated page breaks fall in a
//! continuously-flowing preview.
//!
//! The flow is modeled as repeating bands: a page height of content followed
//! by an inter-page gap. Offsets are measured in millimeters from the top of
//! the flow. The model knows nothing about where a break is *safe* — keeping
//! breaks out of the middle of an entry is the renderer's job, as is real
//! PDF pagination.

use serde::{Deserialize, Serialize};

/// A4 page height used by the preview.
pub const A4_PAGE_HEIGHT_MM: f64 = 297.0;
/// Visual gap rendered between consecutive preview pages.
pub const INTER_PAGE_GAP_MM: f64 = 10.0;

/// Page dimensions for the preview flow. Fixed at process start; never
/// mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGeometry {
    pub page_height_mm: f64,
    pub gap_mm: f64,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_height_mm: A4_PAGE_HEIGHT_MM,
            gap_mm: INTER_PAGE_GAP_MM,
        }
    }
}

/// Returns the offsets at which each successive page band begins inside the
/// flow: `k × (page_height + gap)` for `k ≥ 1`, strictly below the total
/// flow height.
///
/// Content that fits on one page yields no boundaries. Degenerate geometry
/// (non-positive page height, negative gap) and non-finite inputs also yield
/// an empty sequence; the model is total and never fails.
pub fn page_boundaries(total_height_mm: f64, geometry: &PageGeometry) -> Vec<f64> {
    let band_mm = geometry.page_height_mm + geometry.gap_mm;
    if geometry.page_height_mm <= 0.0
        || geometry.gap_mm < 0.0
        || !band_mm.is_finite()
        || !total_height_mm.is_finite()
    {
        return Vec::new();
    }

    let mut boundaries = Vec::new();
    let mut k = 1u32;
    loop {
        let offset = f64::from(k) * band_mm;
        if offset >= total_height_mm {
            return boundaries;
        }
        boundaries.push(offset);
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_boundary_in_600mm_flow() {
        let boundaries = page_boundaries(600.0, &PageGeometry::default());
        assert_eq!(boundaries, vec![307.0]);
    }

    #[test]
    fn test_content_fitting_one_page_has_no_boundaries() {
        let boundaries = page_boundaries(200.0, &PageGeometry::default());
        assert!(boundaries.is_empty());
    }

    #[test]
    fn test_exact_page_height_has_no_boundaries() {
        let boundaries = page_boundaries(297.0, &PageGeometry::default());
        assert!(boundaries.is_empty());
    }

    #[test]
    fn test_long_flow_yields_successive_band_offsets() {
        let boundaries = page_boundaries(1000.0, &PageGeometry::default());
        assert_eq!(boundaries, vec![307.0, 614.0, 921.0]);
    }

    #[test]
    fn test_boundary_on_flow_edge_is_excluded() {
        // A boundary exactly at the end of the flow starts no new page.
        let boundaries = page_boundaries(307.0, &PageGeometry::default());
        assert!(boundaries.is_empty());
    }

    #[test]
    fn test_zero_and_negative_heights_are_empty() {
        let geometry = PageGeometry::default();
        assert!(page_boundaries(0.0, &geometry).is_empty());
        assert!(page_boundaries(-50.0, &geometry).is_empty());
    }

    #[test]
    fn test_degenerate_geometry_is_empty() {
        let flat = PageGeometry {
            page_height_mm: 0.0,
            gap_mm: 10.0,
        };
        assert!(page_boundaries(600.0, &flat).is_empty());

        let negative_gap = PageGeometry {
            page_height_mm: 297.0,
            gap_mm: -10.0,
        };
        assert!(page_boundaries(600.0, &negative_gap).is_empty());
    }

    #[test]
    fn test_custom_geometry() {
        let geometry = PageGeometry {
            page_height_mm: 100.0,
            gap_mm: 0.0,
        };
        assert_eq!(page_boundaries(350.0, &geometry), vec![100.0, 200.0, 300.0]);
    }
}
