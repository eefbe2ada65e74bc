use bevy::prelude::*;

use crate::catalog::StructureKind;
use crate::test_harness::{scene, TestTown, APARTMENT, SHOP_VARIANTS};

#[test]
fn preview_appears_in_build_mode_only() {
    let mut town = TestTown::new(4, 4);
    town.select(StructureKind::Shop).tick();
    assert!(!town.controller().is_placing());
    assert_eq!(town.placed_visual_count(), 0);

    town.build_mode().tick();
    let preview = town.controller().preview().expect("preview");
    assert_eq!(town.scene_of(preview), Some(scene(SHOP_VARIANTS[0])));
    assert_eq!(town.placed_visual_count(), 1);

    town.demolish_mode().tick();
    assert!(!town.controller().is_placing());
    assert!(!town.entity_exists(preview));
}

#[test]
fn preview_follows_highlight_cursor() {
    let mut town = TestTown::new(8, 8);
    town.select(StructureKind::Apartment).build_mode().tick();
    town.move_cursor(Vec3::new(4.0, 0.0, 6.0)).tick();

    let preview = town.controller().preview().unwrap();
    assert_eq!(
        town.transform_of(preview).unwrap().translation,
        Vec3::new(3.0, 0.0, 5.0)
    );

    town.move_cursor(Vec3::new(1.0, 0.0, 1.0)).tick();
    assert_eq!(town.transform_of(preview).unwrap().translation, Vec3::ZERO);
}

#[test]
fn reselecting_swaps_preview() {
    let mut town = TestTown::new(4, 4);
    town.select(StructureKind::Shop).build_mode().tick();
    let shop_preview = town.controller().preview().unwrap();

    town.select(StructureKind::Apartment).tick();
    let apartment_preview = town.controller().preview().unwrap();

    assert!(!town.entity_exists(shop_preview));
    assert_eq!(town.scene_of(apartment_preview), Some(scene(APARTMENT)));
    assert_eq!(town.placed_visual_count(), 1);
}

#[test]
fn preview_survives_placement() {
    let mut town = TestTown::new(4, 4);
    town.place(StructureKind::Shop, 1, 1);
    let preview = town.controller().preview().unwrap();
    town.click(2, 2).tick();

    assert_eq!(town.controller().preview(), Some(preview));
    // preview plus two shops
    assert_eq!(town.placed_visual_count(), 3);
}
