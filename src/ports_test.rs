use super::*;
use crate::catalog::{
    BuildableDef, BuildingDef, Catalog, Clearance, ConveyorDef, ExplicitIo, ExtractorDef,
    GeneratorDef, ItemDef, PipelineDef, RecipeDef, RecipeEntry,
};

// =============================================================
// Helpers
// =============================================================

fn building(id: &str, name: &str) -> BuildingDef {
    BuildingDef {
        id: id.to_owned(),
        name: name.to_owned(),
        clearance: Clearance::default(),
        power_generator: None,
        conveyor: None,
        pipeline: None,
        extractor: None,
        io: None,
        inputs: None,
        outputs: None,
    }
}

fn generator(id: &str, name: &str) -> BuildingDef {
    BuildingDef { power_generator: Some(GeneratorDef::default()), ..building(id, name) }
}

fn item(id: &str, form: crate::catalog::ItemForm) -> ItemDef {
    ItemDef { id: id.to_owned(), name: id.to_owned(), form }
}

fn recipe(id: &str, produced_in: &str, ingredients: &[&str], products: &[&str]) -> RecipeDef {
    let entry = |r: &&str| RecipeEntry { resource: (*r).to_owned(), quantity: 1.0 };
    RecipeDef {
        id: id.to_owned(),
        name: id.to_owned(),
        produced_in: produced_in.to_owned(),
        ingredients: ingredients.iter().map(entry).collect(),
        products: products.iter().map(entry).collect(),
    }
}

fn catalog_of(buildings: Vec<BuildingDef>, items: Vec<ItemDef>, recipes: Vec<RecipeDef>) -> Catalog {
    Catalog::new(buildings, Vec::<BuildableDef>::new(), items, recipes)
}

fn phases(specs: &[PortSpec]) -> Vec<Phase> {
    specs.iter().map(|s| s.phase).collect()
}

// =============================================================
// Tier: unknown id
// =============================================================

#[test]
fn unknown_id_resolves_generic() {
    let cat = catalog_of(vec![], vec![], vec![]);
    let io = resolve_io(&cat, "does_not_exist");
    assert_eq!(phases(&io.inputs), [Phase::Item]);
    assert_eq!(phases(&io.outputs), [Phase::Item]);
}

// =============================================================
// Tier: explicit declarations
// =============================================================

#[test]
fn explicit_io_block_used_verbatim() {
    let mut b = building("sink", "Awesome Sink");
    b.io = Some(ExplicitIo {
        inputs: Some(crate::catalog::PortList::Phases(vec!["item".to_owned()])),
        outputs: None,
    });
    let cat = catalog_of(vec![b], vec![], vec![]);
    let io = resolve_io(&cat, "sink");
    assert_eq!(phases(&io.inputs), [Phase::Item]);
    assert!(io.outputs.is_empty());
}

#[test]
fn explicit_io_unknown_phase_name_reads_as_item() {
    let mut b = building("odd", "Odd");
    b.io = Some(ExplicitIo {
        inputs: Some(crate::catalog::PortList::Phases(vec![
            "liquid".to_owned(),
            "plasma".to_owned(),
            "gas".to_owned(),
        ])),
        outputs: None,
    });
    let cat = catalog_of(vec![b], vec![], vec![]);
    let io = resolve_io(&cat, "odd");
    assert_eq!(phases(&io.inputs), [Phase::Liquid, Phase::Item, Phase::Gas]);
}

#[test]
fn explicit_count_yields_item_ports() {
    let mut b = building("counted", "Counted");
    b.inputs = Some(crate::catalog::PortList::Count(3));
    b.outputs = Some(crate::catalog::PortList::Count(1));
    let cat = catalog_of(vec![b], vec![], vec![]);
    let io = resolve_io(&cat, "counted");
    assert_eq!(phases(&io.inputs), [Phase::Item, Phase::Item, Phase::Item]);
    assert_eq!(phases(&io.outputs), [Phase::Item]);
}

#[test]
fn explicit_io_beats_generator_flag() {
    let mut b = generator("geothermal", "Geothermal Generator");
    b.io = Some(ExplicitIo {
        inputs: None,
        outputs: Some(crate::catalog::PortList::Phases(vec!["item".to_owned()])),
    });
    let cat = catalog_of(vec![b], vec![], vec![]);
    let io = resolve_io(&cat, "geothermal");
    assert!(io.inputs.is_empty());
    assert_eq!(phases(&io.outputs), [Phase::Item]);
}

// =============================================================
// Tier: power generators
// =============================================================

#[test]
fn coal_generator_takes_fuel_and_water() {
    let cat = catalog_of(vec![generator("coal_generator", "Coal Generator")], vec![], vec![]);
    let io = resolve_io(&cat, "coal_generator");
    assert_eq!(phases(&io.inputs), [Phase::Item, Phase::Liquid]);
    assert!(io.outputs.is_empty());
}

#[test]
fn fuel_generator_takes_fuel_and_water() {
    let cat = catalog_of(vec![generator("fuel_generator", "Fuel-Powered Generator")], vec![], vec![]);
    let io = resolve_io(&cat, "fuel_generator");
    assert_eq!(phases(&io.inputs), [Phase::Item, Phase::Liquid]);
    assert!(io.outputs.is_empty());
}

#[test]
fn nuclear_generator_emits_waste() {
    let cat = catalog_of(vec![generator("nuclear_plant", "Nuclear Power Plant")], vec![], vec![]);
    let io = resolve_io(&cat, "nuclear_plant");
    assert_eq!(phases(&io.inputs), [Phase::Item, Phase::Liquid]);
    assert_eq!(phases(&io.outputs), [Phase::Item]);
}

#[test]
fn biomass_burner_takes_fuel_only() {
    let cat = catalog_of(vec![generator("biomass_burner", "Biomass Burner")], vec![], vec![]);
    let io = resolve_io(&cat, "biomass_burner");
    assert_eq!(phases(&io.inputs), [Phase::Item]);
    assert!(io.outputs.is_empty());
}

#[test]
fn unclassified_generator_defaults_to_one_fuel_input() {
    let cat = catalog_of(vec![generator("mystery", "Mystery Generator")], vec![], vec![]);
    let io = resolve_io(&cat, "mystery");
    assert_eq!(phases(&io.inputs), [Phase::Item]);
    assert!(io.outputs.is_empty());
}

// =============================================================
// Tier: transport
// =============================================================

#[test]
fn belt_is_item_passthrough() {
    let mut b = building("conveyor_belt_mk1", "Conveyor Belt Mk.1");
    b.conveyor = Some(ConveyorDef { is_belt: true });
    let cat = catalog_of(vec![b], vec![], vec![]);
    let io = resolve_io(&cat, "conveyor_belt_mk1");
    assert_eq!(phases(&io.inputs), [Phase::Item]);
    assert_eq!(phases(&io.outputs), [Phase::Item]);
}

#[test]
fn non_belt_conveyor_falls_through() {
    let mut b = building("conveyor_lift_mk1", "Conveyor Lift Mk.1");
    b.conveyor = Some(ConveyorDef { is_belt: false });
    let cat = catalog_of(vec![b], vec![], vec![]);
    // No recipes and no matching name pattern: generic default.
    let io = resolve_io(&cat, "conveyor_lift_mk1");
    assert_eq!(phases(&io.inputs), [Phase::Item]);
    assert_eq!(phases(&io.outputs), [Phase::Item]);
}

#[test]
fn pipeline_is_liquid_passthrough() {
    let mut b = building("pipeline_mk1", "Pipeline Mk.1");
    b.pipeline = Some(PipelineDef { is_pipeline: true });
    let cat = catalog_of(vec![b], vec![], vec![]);
    let io = resolve_io(&cat, "pipeline_mk1");
    assert_eq!(phases(&io.inputs), [Phase::Liquid]);
    assert_eq!(phases(&io.outputs), [Phase::Liquid]);
}

#[test]
fn extractor_has_no_inputs() {
    let mut b = building("miner_mk1", "Miner Mk.1");
    b.extractor = Some(ExtractorDef::default());
    let cat = catalog_of(vec![b], vec![], vec![]);
    let io = resolve_io(&cat, "miner_mk1");
    assert!(io.inputs.is_empty());
    assert_eq!(phases(&io.outputs), [Phase::Item]);
}

// =============================================================
// Tier: recipe-derived
// =============================================================

#[test]
fn recipe_io_maps_resource_forms() {
    let cat = catalog_of(
        vec![building("refinery", "Oil Refinery")],
        vec![
            item("crude_oil", crate::catalog::ItemForm::Liquid),
            item("polymer_resin", crate::catalog::ItemForm::Solid),
            item("fuel", crate::catalog::ItemForm::Liquid),
        ],
        vec![recipe("fuel_recipe", "refinery", &["crude_oil"], &["fuel", "polymer_resin"])],
    );
    let io = resolve_io(&cat, "refinery");
    assert_eq!(phases(&io.inputs), [Phase::Liquid]);
    assert_eq!(phases(&io.outputs), [Phase::Liquid, Phase::Item]);
}

#[test]
fn recipe_with_most_ingredients_wins() {
    let cat = catalog_of(
        vec![building("assembler", "Assembler")],
        vec![],
        vec![
            recipe("simple", "assembler", &["a"], &["x"]),
            recipe("complex", "assembler", &["a", "b"], &["x"]),
        ],
    );
    let io = resolve_io(&cat, "assembler");
    assert_eq!(io.inputs.len(), 2);
}

#[test]
fn recipe_tie_keeps_catalog_order() {
    let cat = catalog_of(
        vec![building("mill", "Mill")],
        vec![item("water", crate::catalog::ItemForm::Liquid)],
        vec![
            recipe("first", "mill", &["water"], &["x"]),
            recipe("second", "mill", &["grain"], &["x"]),
        ],
    );
    // Both recipes have one ingredient; the earlier row decides the phase.
    let io = resolve_io(&cat, "mill");
    assert_eq!(phases(&io.inputs), [Phase::Liquid]);
}

#[test]
fn unknown_resource_reads_as_item() {
    let cat = catalog_of(
        vec![building("shop", "Workshop")],
        vec![],
        vec![recipe("made_up", "shop", &["unobtainium"], &["gadget"])],
    );
    let io = resolve_io(&cat, "shop");
    assert_eq!(phases(&io.inputs), [Phase::Item]);
    assert_eq!(phases(&io.outputs), [Phase::Item]);
}

#[test]
fn empty_recipe_falls_through_to_name_pattern() {
    let cat = catalog_of(
        vec![building("blender_x", "Blender")],
        vec![],
        vec![recipe("hollow", "blender_x", &[], &[])],
    );
    let io = resolve_io(&cat, "blender_x");
    assert_eq!(
        phases(&io.inputs),
        [Phase::Item, Phase::Item, Phase::Liquid, Phase::Liquid]
    );
    assert_eq!(phases(&io.outputs), [Phase::Item, Phase::Liquid]);
}

// =============================================================
// Tier: name patterns
// =============================================================

#[test]
fn name_pattern_table() {
    let cases: [(&str, usize, usize); 8] = [
        ("Constructor", 1, 1),
        ("Assembler", 2, 1),
        ("Manufacturer", 4, 1),
        ("Smelter", 1, 1),
        ("Foundry", 1, 1),
        ("Particle Accelerator", 2, 1),
        ("Converter", 1, 1),
        ("Completely Unknown Machine", 1, 1),
    ];
    for (name, inputs, outputs) in cases {
        let cat = catalog_of(vec![building("b", name)], vec![], vec![]);
        let io = resolve_io(&cat, "b");
        assert_eq!(io.inputs.len(), inputs, "{name} inputs");
        assert_eq!(io.outputs.len(), outputs, "{name} outputs");
    }
}

#[test]
fn refinery_pattern_mixes_item_and_liquid() {
    let cat = catalog_of(vec![building("b", "Refinery")], vec![], vec![]);
    let io = resolve_io(&cat, "b");
    assert_eq!(phases(&io.inputs), [Phase::Item, Phase::Liquid]);
    assert_eq!(phases(&io.outputs), [Phase::Item, Phase::Liquid]);
}

#[test]
fn packager_pattern_matches_refinery_layout() {
    let cat = catalog_of(vec![building("b", "Packager")], vec![], vec![]);
    let io = resolve_io(&cat, "b");
    assert_eq!(phases(&io.inputs), [Phase::Item, Phase::Liquid]);
    assert_eq!(phases(&io.outputs), [Phase::Item, Phase::Liquid]);
}

#[test]
fn assembler_pattern_only_applies_without_recipes() {
    // With a recipe present the recipe tier wins over the name table.
    let cat = catalog_of(
        vec![building("assembler", "Assembler")],
        vec![],
        vec![recipe("one_in", "assembler", &["a"], &["x"])],
    );
    let io = resolve_io(&cat, "assembler");
    assert_eq!(io.inputs.len(), 1);
}

// =============================================================
// Serde forms
// =============================================================

#[test]
fn phase_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Phase::Liquid).unwrap(), "\"liquid\"");
    assert_eq!(serde_json::to_string(&PortDirection::Output).unwrap(), "\"output\"");
}
