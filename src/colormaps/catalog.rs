//! Process-wide palette catalog.
//!
//! Built on first use and read-only afterwards. Every palette is also
//! registered reversed under `<name>_r`.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use tracing::debug;

use super::colormap::{Colormap, Palette};
use super::generated;
use super::tables;
use crate::error::{OceansError, Result};

/// Entries in the generated palettes
const GENERATED_ENTRIES: usize = 256;

static CATALOG: Lazy<BTreeMap<String, Palette>> = Lazy::new(build_catalog);

fn build_catalog() -> BTreeMap<String, Palette> {
    let base = vec![
        Palette::from_trusted("phasemap", generated::phasemap(GENERATED_ENTRIES)),
        Palette::from_trusted("zebra", generated::zebra(4, GENERATED_ENTRIES, 0.5)),
        Palette::from_trusted("avhrr", generated::avhrr(GENERATED_ENTRIES)),
        Palette::from_trusted("ctopo_pos_neg", generated::ctopo_pos_neg(GENERATED_ENTRIES)),
        Palette::from_bytes("cbathy", &tables::CBATHY),
        Palette::from_bytes("coolavhrrmap", &tables::COOLAVHRRMAP),
        Palette::from_bytes("rscolmap", &tables::RSCOLMAP),
        Palette::from_bytes("redgreen", &tables::REDGREEN),
        Palette::from_bytes("redblue_light", &tables::REDBLUE_LIGHT),
        Palette::from_bytes("redblue_dark", &tables::REDBLUE_DARK),
        Palette::from_bytes("ctopo", &tables::CTOPO),
        Palette::from_trusted("odv", tables::ODV.to_vec()),
    ];

    let mut catalog = BTreeMap::new();
    for palette in base {
        let reversed = palette.reversed();
        catalog.insert(reversed.name().to_string(), reversed);
        catalog.insert(palette.name().to_string(), palette);
    }

    debug!(palettes = catalog.len(), "Built palette catalog");
    catalog
}

/// The whole catalog, keyed by name
pub fn catalog() -> &'static BTreeMap<String, Palette> {
    &CATALOG
}

/// Get a palette by name
pub fn get_colormap(name: &str) -> Result<&'static Palette> {
    CATALOG
        .get(name.to_lowercase().as_str())
        .ok_or_else(|| OceansError::InvalidParameter {
            param: "colormap".to_string(),
            message: format!("Unknown colormap: {}", name),
        })
}

/// Names of every registered palette, sorted
pub fn colormap_names() -> Vec<&'static str> {
    CATALOG.keys().map(String::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let names = colormap_names();
        assert_eq!(names.len(), 24);
        for name in [
            "phasemap", "zebra", "avhrr", "ctopo_pos_neg", "cbathy", "coolavhrrmap", "rscolmap",
            "redgreen", "redblue_light", "redblue_dark", "ctopo", "odv",
        ] {
            assert!(names.contains(&name), "missing {}", name);
            assert!(names.contains(&format!("{}_r", name).as_str()));
        }
    }

    #[test]
    fn test_every_palette_is_valid() {
        for (name, palette) in catalog() {
            assert_eq!(palette.name(), name);
            assert!(Palette::new(name.clone(), palette.colors().to_vec()).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(get_colormap("cbathy").unwrap().len(), 64);
        assert_eq!(get_colormap("odv").unwrap().len(), 113);
        assert_eq!(get_colormap("zebra").unwrap().len(), 256);
    }

    #[test]
    fn test_reversed_variant() {
        let cbathy = get_colormap("cbathy").unwrap();
        let reversed = get_colormap("cbathy_r").unwrap();
        assert_eq!(reversed.colors()[0], cbathy.colors()[63]);
        assert_eq!(cbathy.colors()[0], [8.0 / 255.0, 241.0 / 255.0, 1.0]);
    }

    #[test]
    fn test_lookup() {
        assert!(get_colormap("ODV").is_ok());
        match get_colormap("viridis") {
            Err(OceansError::InvalidParameter { param, .. }) => assert_eq!(param, "colormap"),
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_concurrent_readers() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| get_colormap("odv").map(|p| p.len()).unwrap_or(0)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 113);
        }
    }
}
