//! Building I/O resolution: how many connection points a building exposes
//! and what material phase each carries.
//!
//! [`resolve_io`] is a pure lookup over the static catalog. Several tiers
//! cover gaps in the data, tried in order with the first match winning:
//!
//! 1. explicit `io` block on the building row;
//! 2. explicit top-level `inputs`/`outputs` declaration;
//! 3. power-generator flags, refined by generator class (coal/fuel, nuclear,
//!    biomass);
//! 4. belt segments (1 item in, 1 item out);
//! 5. pipe segments (1 liquid in, 1 liquid out);
//! 6. extractors (no inputs, 1 item out);
//! 7. recipe-derived worst case: the recipe with the most ingredients among
//!    those run in the building, each resource mapped to its item form;
//! 8. display-name patterns (constructors, assemblers, refineries, ...);
//! 9. unknown id: the generic 1-in/1-out item default.
//!
//! Later tiers exist specifically to cover rows the earlier tiers miss, so
//! the precedence is load-bearing. No tier fails; every path terminates in a
//! concrete port layout.

#[cfg(test)]
#[path = "ports_test.rs"]
mod ports_test;

use serde::{Deserialize, Serialize};

use crate::catalog::{BuildingDef, Catalog, ItemForm, PortList};

/// Material phase carried by a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Solid item on a conveyor.
    #[default]
    Item,
    /// Liquid in a pipe.
    Liquid,
    /// Gas in a pipe.
    Gas,
}

/// Direction of a port relative to its building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    /// The port consumes material.
    Input,
    /// The port produces material.
    Output,
}

/// A single typed connection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortSpec {
    /// Material phase this port carries.
    pub phase: Phase,
}

/// Resolved port layout for a building: ordered inputs and outputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IoConfig {
    /// Input ports, in port order.
    pub inputs: Vec<PortSpec>,
    /// Output ports, in port order.
    pub outputs: Vec<PortSpec>,
}

impl IoConfig {
    fn of(inputs: &[Phase], outputs: &[Phase]) -> Self {
        Self {
            inputs: inputs.iter().map(|&phase| PortSpec { phase }).collect(),
            outputs: outputs.iter().map(|&phase| PortSpec { phase }).collect(),
        }
    }

    /// The generic 1-in/1-out item layout used when nothing better is known.
    #[must_use]
    pub fn generic() -> Self {
        Self::of(&[Phase::Item], &[Phase::Item])
    }
}

/// Resolve the input/output port layout for `building_id`.
///
/// Pure and total: an id missing from the catalog resolves to the generic
/// 1-in/1-out item layout rather than failing.
#[must_use]
pub fn resolve_io(catalog: &Catalog, building_id: &str) -> IoConfig {
    let Some(building) = catalog.building(building_id) else {
        return IoConfig::generic();
    };

    if let Some(io) = explicit_io(building) {
        return io;
    }
    if building.power_generator.is_some() {
        return generator_io(&building.name);
    }
    if building.conveyor.as_ref().is_some_and(|c| c.is_belt) {
        return IoConfig::of(&[Phase::Item], &[Phase::Item]);
    }
    if building.pipeline.as_ref().is_some_and(|p| p.is_pipeline) {
        return IoConfig::of(&[Phase::Liquid], &[Phase::Liquid]);
    }
    if building.extractor.is_some() {
        // Extractors pull from a resource node; output phase defaults to
        // item unless the row declares explicit ports (handled above).
        return IoConfig::of(&[], &[Phase::Item]);
    }
    if let Some(io) = recipe_io(catalog, building_id) {
        return io;
    }
    name_pattern_io(&building.name)
}

/// Tier 1-2: explicit port declarations on the building row.
fn explicit_io(building: &BuildingDef) -> Option<IoConfig> {
    if let Some(io) = &building.io {
        if io.inputs.is_some() || io.outputs.is_some() {
            return Some(IoConfig {
                inputs: io.inputs.as_ref().map(declared_ports).unwrap_or_default(),
                outputs: io.outputs.as_ref().map(declared_ports).unwrap_or_default(),
            });
        }
    }
    if building.inputs.is_some() || building.outputs.is_some() {
        return Some(IoConfig {
            inputs: building.inputs.as_ref().map(declared_ports).unwrap_or_default(),
            outputs: building.outputs.as_ref().map(declared_ports).unwrap_or_default(),
        });
    }
    None
}

fn declared_ports(list: &PortList) -> Vec<PortSpec> {
    match list {
        PortList::Count(n) => vec![PortSpec { phase: Phase::Item }; *n as usize],
        PortList::Phases(names) => names
            .iter()
            .map(|name| PortSpec { phase: parse_phase(name) })
            .collect(),
    }
}

fn parse_phase(name: &str) -> Phase {
    match name {
        "liquid" => Phase::Liquid,
        "gas" => Phase::Gas,
        _ => Phase::Item,
    }
}

/// Tier 3: generator class by name. Fuel is one input port regardless of how
/// many fuel items the generator accepts.
fn generator_io(name: &str) -> IoConfig {
    let name = name.to_lowercase();

    // Default for generators: one fuel input, no outputs.
    let mut io = IoConfig::of(&[Phase::Item], &[]);

    // Water-cooled generators take a liquid coolant alongside the fuel.
    if name.contains("coal") || name.contains("fuel") {
        io = IoConfig::of(&[Phase::Item, Phase::Liquid], &[]);
    }
    // Nuclear adds a conveyor output for the spent fuel.
    if name.contains("nuclear") {
        io = IoConfig::of(&[Phase::Item, Phase::Liquid], &[Phase::Item]);
    }
    // Biomass burners take fuel only.
    if name.contains("biomass") {
        io = IoConfig::of(&[Phase::Item], &[]);
    }
    io
}

/// Tier 7: derive ports from the worst-case recipe run in this building.
fn recipe_io(catalog: &Catalog, building_id: &str) -> Option<IoConfig> {
    // Most ingredients wins; ties keep the earliest recipe in catalog order.
    let recipe = catalog
        .recipes_for(building_id)
        .reduce(|a, b| if a.ingredients.len() >= b.ingredients.len() { a } else { b })?;

    let inputs: Vec<PortSpec> = recipe
        .ingredients
        .iter()
        .map(|e| PortSpec { phase: resource_phase(catalog, &e.resource) })
        .collect();
    let outputs: Vec<PortSpec> = recipe
        .products
        .iter()
        .map(|e| PortSpec { phase: resource_phase(catalog, &e.resource) })
        .collect();

    if inputs.is_empty() && outputs.is_empty() {
        return None;
    }
    Some(IoConfig { inputs, outputs })
}

fn resource_phase(catalog: &Catalog, resource_id: &str) -> Phase {
    match catalog.item_form(resource_id) {
        Some(ItemForm::Liquid) => Phase::Liquid,
        Some(ItemForm::Gas) => Phase::Gas,
        _ => Phase::Item,
    }
}

/// Tier 8: fixed layouts keyed by display-name substrings.
fn name_pattern_io(name: &str) -> IoConfig {
    use Phase::{Item, Liquid};

    if name.contains("Constructor") {
        IoConfig::of(&[Item], &[Item])
    } else if name.contains("Assembler") {
        IoConfig::of(&[Item, Item], &[Item])
    } else if name.contains("Manufacturer") {
        IoConfig::of(&[Item, Item, Item, Item], &[Item])
    } else if name.contains("Smelter") || name.contains("Foundry") {
        IoConfig::of(&[Item], &[Item])
    } else if name.contains("Refinery") || name.contains("Packager") {
        IoConfig::of(&[Item, Liquid], &[Item, Liquid])
    } else if name.contains("Blender") {
        IoConfig::of(&[Item, Item, Liquid, Liquid], &[Item, Liquid])
    } else if name.contains("Particle Accelerator") {
        IoConfig::of(&[Item, Item], &[Item])
    } else if name.contains("Converter") {
        IoConfig::of(&[Item], &[Item])
    } else {
        IoConfig::generic()
    }
}
