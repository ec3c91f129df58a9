//! Region labeling regression test
//!
//! Labels masks from seams found on random cost grids and checks that
//! every cell gets a label, that the seam cells are exactly the seam, and
//! that the two regions never touch across a side.

use seamstitch_core::{Connectivity, Grid, Label, Mask, Position, render_mask};
use seamstitch_region::{
    FillOptions, RegionError, find_region_contacts, is_cleanly_separated, label_mask,
    label_regions, mark_seam, side_of_seam,
};
use seamstitch_seam::{SeamOptions, find_seam};
use seamstitch_test::{RegParams, SimpleRng};

#[test]
fn floodfill_reg() {
    let mut rp = RegParams::new("floodfill");

    // --- Test 1: staircase seam ---
    eprintln!("=== staircase ===");
    let seam = [
        Position::new(0, 0),
        Position::new(0, 1),
        Position::new(1, 1),
        Position::new(1, 2),
        Position::new(2, 2),
        Position::new(2, 3),
    ];
    let mut mask = Mask::empty_mask(4, 3).expect("mask");
    let stats = label_mask(&mut mask, &seam, &FillOptions::default()).expect("label");
    rp.compare_mask("##BB\nA##B\nAA##\n", &mask);
    rp.compare_values(6.0, stats.seam as f64, 0.0);
    rp.compare_values(3.0, stats.region_a as f64, 0.0);
    rp.compare_values(3.0, stats.region_b as f64, 0.0);
    rp.check(!stats.leaked, "staircase holds");

    // --- Test 2: diagonal seam, both connectivities ---
    eprintln!("=== diagonal ===");
    let seam = [
        Position::new(0, 0),
        Position::new(1, 1),
        Position::new(2, 2),
        Position::new(2, 3),
    ];
    let mut four = Mask::empty_mask(4, 3).expect("mask");
    let stats = label_mask(&mut four, &seam, &FillOptions::default()).expect("four-way");
    rp.compare_mask("#BBB\nA#BB\nAA##\n", &four);
    rp.check(!stats.leaked, "four-way fill stops at diagonal steps");
    rp.check(is_cleanly_separated(&four), "four-way regions separated");

    let mut eight = Mask::empty_mask(4, 3).expect("mask");
    let options = FillOptions::new(Connectivity::EightWay);
    let stats = label_mask(&mut eight, &seam, &options).expect("eight-way");
    rp.check(stats.leaked, "eight-way fill crosses diagonal steps");
    rp.compare_values(0.0, stats.region_b as f64, 0.0);
    rp.compare_values(0.0, eight.count(Label::RegionB) as f64, 0.0);

    // --- Test 3: seam doubling back walls in cells ---
    eprintln!("=== enclosed cells ===");
    let seam = [
        Position::new(0, 0),
        Position::new(0, 1),
        Position::new(1, 2),
        Position::new(2, 1),
        Position::new(2, 0),
        Position::new(3, 1),
        Position::new(3, 2),
    ];
    let mut mask = Mask::empty_mask(3, 4).expect("mask");
    mark_seam(&mut mask, &seam).expect("mark");
    let err = label_regions(&mut mask, &FillOptions::default()).unwrap_err();
    rp.check(
        err == RegionError::UnlabeledCells { count: 3 },
        "three cells enclosed by the seam",
    );

    let mut mask = Mask::empty_mask(3, 4).expect("mask");
    let stats = label_mask(&mut mask, &seam, &FillOptions::default()).expect("label");
    rp.compare_mask("##B\nAA#\n##B\nA##\n", &mask);
    rp.compare_values(3.0, stats.pockets as f64, 0.0);
    rp.compare_values(3.0, stats.region_a as f64, 0.0);
    rp.compare_values(2.0, stats.region_b as f64, 0.0);
    rp.check(
        mask.get(Position::new(2, 2)).ok() == Some(side_of_seam(&seam, Position::new(2, 2))),
        "enclosed cell takes its side of the seam",
    );
    rp.check(is_cleanly_separated(&mask), "pockets keep regions apart");

    assert!(rp.cleanup());
}

#[test]
fn floodfill_random_reg() {
    let mut rp = RegParams::new("floodfill_random");

    let mut rng = SimpleRng::new(7);
    for trial in 0..40 {
        let width = 1 + rng.below(10);
        let height = 1 + rng.below(10);
        let costs: Grid<f64> = rng
            .grid(width, height, 5)
            .expect("random costs")
            .map(|&v| v as f64);
        let seam = find_seam(width, height, &costs, &SeamOptions::default()).expect("seam");

        let mut mask = Mask::empty_mask(width, height).expect("mask");
        let stats = label_mask(&mut mask, &seam, &FillOptions::default()).expect("label");

        rp.compare_values(0.0, mask.count(Label::Empty) as f64, 0.0);
        let mut marked = mask.positions_of(Label::Seam);
        let mut expected = seam.positions().to_vec();
        marked.sort();
        expected.sort();
        rp.check(marked == expected, "seam cells are exactly the seam");
        rp.check(find_region_contacts(&mask).is_empty(), "regions never touch");
        rp.check(!stats.leaked, "four-way fill never leaks");
        rp.compare_values(
            (width * height) as f64,
            (stats.seam + stats.region_a + stats.region_b) as f64,
            0.0,
        );

        let agrees = mask.positions().all(|p| match mask.get_unchecked(p) {
            Label::Seam => true,
            label => label == side_of_seam(&seam, p),
        });
        rp.check(agrees, "every cell lies on its side of the seam");

        if !rp.is_success() {
            eprintln!("trial {} ({}x{}):\n{}", trial, width, height, render_mask(&mask));
            break;
        }
    }

    assert!(rp.cleanup());
}
