//! The preset table: an immutable mapping from name to preset, constructed
//! once at first use from the per-category data modules.

use hashbrown::HashMap;
use once_cell::sync::Lazy;

use crate::error::MotionError;
use crate::names::{Category, PresetName};
use crate::preset::Preset;

mod attention;
mod back;
mod bounce;
mod fade;
mod flip;
mod lightspeed;
mod rotate;
mod slide;
mod special;
mod zoom;

/// Read-only preset table. Lookups are O(1) and side-effect-free.
#[derive(Debug)]
pub struct Catalog {
    presets: HashMap<PresetName, Preset>,
}

impl Catalog {
    /// Build and validate the full table.
    ///
    /// Any invariant violation in the authored data surfaces here as
    /// `MalformedPreset`; render paths never see an invalid entry.
    pub fn build() -> Result<Catalog, MotionError> {
        let mut presets: HashMap<PresetName, Preset> =
            HashMap::with_capacity(PresetName::ALL.len());

        let all = attention::presets()
            .into_iter()
            .chain(back::presets())
            .chain(bounce::presets())
            .chain(fade::presets())
            .chain(flip::presets())
            .chain(lightspeed::presets())
            .chain(rotate::presets())
            .chain(special::presets())
            .chain(zoom::presets())
            .chain(slide::presets());

        for preset in all {
            preset.validate()?;
            let name = preset.name;
            if presets.insert(name, preset).is_some() {
                return Err(MotionError::malformed(name.as_str(), "duplicate catalog entry"));
            }
        }

        for &name in PresetName::ALL {
            if !presets.contains_key(&name) {
                return Err(MotionError::malformed(name.as_str(), "missing catalog entry"));
            }
        }

        Ok(Catalog { presets })
    }

    /// Fetch by typed name. Total: construction guarantees every
    /// [`PresetName`] has an entry.
    pub fn get(&self, name: PresetName) -> &Preset {
        &self.presets[&name]
    }

    /// Fetch by wire name, failing fast on anything outside the table.
    pub fn lookup(&self, name: &str) -> Result<&Preset, MotionError> {
        let key: PresetName = name.parse()?;
        Ok(self.get(key))
    }

    /// All presets in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Preset> + '_ {
        PresetName::ALL.iter().map(move |&name| self.get(name))
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Preset> + '_ {
        self.iter().filter(move |p| p.category == category)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// The process-wide table. Built on first access; an invalid builtin table is
/// a fatal configuration error, not something callers can recover from.
pub fn catalog() -> &'static Catalog {
    static CATALOG: Lazy<Catalog> = Lazy::new(|| match Catalog::build() {
        Ok(catalog) => {
            log::debug!("preset table built: {} presets", catalog.len());
            catalog
        }
        Err(err) => panic!("builtin preset table invalid: {err}"),
    });
    &CATALOG
}
