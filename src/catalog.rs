//! Static game-data catalog: buildings, structural pieces, items, recipes.
//!
//! This module defines typed rows for the read-only data tables the planner
//! consumes (`BuildingDef`, `BuildableDef`, `ItemDef`, `RecipeDef`) and the
//! [`Catalog`] that indexes them by id. Field names follow the camelCase
//! convention of the upstream game-data JSON files, so the tables can be
//! deserialized directly from them via [`Catalog::from_json`].
//!
//! The catalog is queried by the port resolver (flags, recipes, item forms)
//! and by placement operations (display name, clearance). Lookups tolerate
//! unknown ids by returning `None`; callers fall back to safe defaults.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Physical form of an item as declared in the game data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemForm {
    /// Conveyable solid item.
    #[default]
    Solid,
    /// Pipeline-carried liquid.
    Liquid,
    /// Pipeline-carried gas.
    Gas,
}

/// Real-world clearance of a piece, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Clearance {
    /// Width along the x axis.
    pub width: f64,
    /// Length along the y axis.
    pub length: f64,
    /// Height; unused by the 2D planner but present in the data.
    #[serde(default)]
    pub height: f64,
}

/// Power generator block on a building row. Presence marks the building as a
/// fuel-burning generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorDef {
    /// Power produced in MW, when the data declares it.
    #[serde(default)]
    pub power_production: f64,
}

/// Conveyor block on a building row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConveyorDef {
    /// True for belt segments (as opposed to lifts, splitters, mergers).
    #[serde(default)]
    pub is_belt: bool,
}

/// Pipeline block on a building row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineDef {
    /// True for pipe segments.
    #[serde(default)]
    pub is_pipeline: bool,
}

/// Extractor block on a building row (miners, pumps, wells).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractorDef {
    /// Resource forms this extractor can pull from a node.
    #[serde(default)]
    pub allowed_resource_forms: Vec<ItemForm>,
}

/// Explicit port declaration on a building row: either per-port phase names
/// (`["item", "liquid"]`, unknown names read as item) or a bare count of
/// item ports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortList {
    /// A count of item-phase ports.
    Count(u32),
    /// One phase name per port, in port order.
    Phases(Vec<String>),
}

/// Explicit `io` block on a building row. Either side may be omitted,
/// meaning that side has no ports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplicitIo {
    /// Input port declaration, if any.
    #[serde(default)]
    pub inputs: Option<PortList>,
    /// Output port declaration, if any.
    #[serde(default)]
    pub outputs: Option<PortList>,
}

/// A production or logistics building row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingDef {
    /// Stable identifier, e.g. `"smelter"`.
    pub id: String,
    /// Display name, e.g. `"Smelter"`. Also feeds the name-pattern fallback
    /// tier of the port resolver.
    pub name: String,
    /// Footprint clearance in meters.
    #[serde(default)]
    pub clearance: Clearance,
    /// Present when the building is a power generator.
    #[serde(default)]
    pub power_generator: Option<GeneratorDef>,
    /// Present when the building is conveyor infrastructure.
    #[serde(default)]
    pub conveyor: Option<ConveyorDef>,
    /// Present when the building is pipeline infrastructure.
    #[serde(default)]
    pub pipeline: Option<PipelineDef>,
    /// Present when the building extracts resources from a node.
    #[serde(default)]
    pub extractor: Option<ExtractorDef>,
    /// Explicit port layout, overriding all inference.
    #[serde(default)]
    pub io: Option<ExplicitIo>,
    /// Top-level explicit input declaration (older data shape).
    #[serde(default)]
    pub inputs: Option<PortList>,
    /// Top-level explicit output declaration (older data shape).
    #[serde(default)]
    pub outputs: Option<PortList>,
}

/// A structural piece row (foundations, walls, beams, logistics shells).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildableDef {
    /// Stable identifier, e.g. `"foundation_8x8"`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Footprint clearance in meters.
    #[serde(default)]
    pub clearance: Clearance,
}

/// An item (resource) row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    /// Stable identifier, e.g. `"iron_ore"`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Physical form; drives the phase of recipe-derived ports.
    #[serde(default)]
    pub form: ItemForm,
}

/// One ingredient or product line in a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeEntry {
    /// Item id of the resource consumed or produced.
    pub resource: String,
    /// Amount per craft.
    #[serde(default)]
    pub quantity: f64,
}

/// A production recipe row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDef {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Id of the building that runs this recipe.
    pub produced_in: String,
    /// Consumed resources, in port order.
    #[serde(default)]
    pub ingredients: Vec<RecipeEntry>,
    /// Produced resources, in port order.
    #[serde(default)]
    pub products: Vec<RecipeEntry>,
}

/// Error returned by [`Catalog::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// One of the catalog tables was not valid JSON for its row type.
    #[error("failed to decode {table} table: {source}")]
    Decode {
        /// Which table failed (`"buildings"`, `"buildables"`, `"items"`, `"recipes"`).
        table: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only static data tables, indexed by id.
///
/// Row order is preserved: when two rows share an id the first wins, and
/// recipe iteration follows catalog order (the recipe tie-break in the port
/// resolver depends on this).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    buildings: Vec<BuildingDef>,
    buildables: Vec<BuildableDef>,
    items: Vec<ItemDef>,
    recipes: Vec<RecipeDef>,
    building_index: HashMap<String, usize>,
    buildable_index: HashMap<String, usize>,
    item_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-decoded tables.
    #[must_use]
    pub fn new(
        buildings: Vec<BuildingDef>,
        buildables: Vec<BuildableDef>,
        items: Vec<ItemDef>,
        recipes: Vec<RecipeDef>,
    ) -> Self {
        let mut building_index = HashMap::new();
        for (i, b) in buildings.iter().enumerate() {
            building_index.entry(b.id.clone()).or_insert(i);
        }
        let mut buildable_index = HashMap::new();
        for (i, b) in buildables.iter().enumerate() {
            buildable_index.entry(b.id.clone()).or_insert(i);
        }
        let mut item_index = HashMap::new();
        for (i, it) in items.iter().enumerate() {
            item_index.entry(it.id.clone()).or_insert(i);
        }
        Self { buildings, buildables, items, recipes, building_index, buildable_index, item_index }
    }

    /// Decode the four tables from their JSON array forms.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Decode`] naming the first table that failed.
    pub fn from_json(
        buildings: &str,
        buildables: &str,
        items: &str,
        recipes: &str,
    ) -> Result<Self, CatalogError> {
        let buildings = serde_json::from_str(buildings)
            .map_err(|source| CatalogError::Decode { table: "buildings", source })?;
        let buildables = serde_json::from_str(buildables)
            .map_err(|source| CatalogError::Decode { table: "buildables", source })?;
        let items = serde_json::from_str(items)
            .map_err(|source| CatalogError::Decode { table: "items", source })?;
        let recipes = serde_json::from_str(recipes)
            .map_err(|source| CatalogError::Decode { table: "recipes", source })?;
        Ok(Self::new(buildings, buildables, items, recipes))
    }

    // --- Lookups ---

    /// Building row by id.
    #[must_use]
    pub fn building(&self, id: &str) -> Option<&BuildingDef> {
        self.building_index.get(id).map(|&i| &self.buildings[i])
    }

    /// Structural piece row by id.
    #[must_use]
    pub fn buildable(&self, id: &str) -> Option<&BuildableDef> {
        self.buildable_index.get(id).map(|&i| &self.buildables[i])
    }

    /// Item row by id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&ItemDef> {
        self.item_index.get(id).map(|&i| &self.items[i])
    }

    /// Physical form of an item, if the item is known.
    #[must_use]
    pub fn item_form(&self, id: &str) -> Option<ItemForm> {
        self.item(id).map(|it| it.form)
    }

    /// Recipes produced in the given building, in catalog order.
    pub fn recipes_for<'a>(&'a self, building_id: &'a str) -> impl Iterator<Item = &'a RecipeDef> {
        self.recipes.iter().filter(move |r| r.produced_in == building_id)
    }

    /// All building rows, in catalog order.
    pub fn buildings(&self) -> impl Iterator<Item = &BuildingDef> {
        self.buildings.iter()
    }

    /// All structural piece rows, in catalog order.
    pub fn buildables(&self) -> impl Iterator<Item = &BuildableDef> {
        self.buildables.iter()
    }

    // --- Structural categories (palette groupings) ---

    /// All foundation pieces (standard foundations and ramps), sorted by name.
    #[must_use]
    pub fn foundations(&self) -> Vec<&BuildableDef> {
        self.buildables_matching(|b| b.id.starts_with("foundation_") || b.id.starts_with("ramp_"))
    }

    /// All wall pieces, sorted by name.
    #[must_use]
    pub fn walls(&self) -> Vec<&BuildableDef> {
        self.buildables_matching(|b| b.id.starts_with("wall_"))
    }

    /// All logistics infrastructure (belts, splitters, mergers, lifts), sorted by name.
    #[must_use]
    pub fn logistics(&self) -> Vec<&BuildableDef> {
        self.buildables_matching(|b| {
            b.id.contains("conveyor_") || b.id.contains("splitter") || b.id.contains("merger")
        })
    }

    fn buildables_matching(&self, pred: impl Fn(&BuildableDef) -> bool) -> Vec<&BuildableDef> {
        let mut matches: Vec<&BuildableDef> = self.buildables.iter().filter(|b| pred(b)).collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        matches
    }
}
