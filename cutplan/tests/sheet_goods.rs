use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use test_case::test_case;

use cutplan::PlanError;
use cutplan::entities::{Panel, PlacedPanel};
use cutplan::sheet_goods::{MultiSheetAllocator, RectanglePacker, allocate};
use cutplan::util::assertions::{layout_covers_panels, layout_is_valid};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn panel_taller_than_sheet_exhausts_budget() {
    init_logger();
    let panels = vec![Panel::new(50.0, 90.0, "top")];
    match allocate(&panels, 96.0, 48.0) {
        Err(PlanError::PackingExhausted {
            attempts,
            residual,
            layout,
        }) => {
            assert_eq!(attempts, 1);
            assert_eq!(residual, panels);
            assert_eq!(layout.n_sheets(), 0);
        }
        other => panic!("expected PackingExhausted, got {other:?}"),
    }
}

#[test]
fn full_width_panels_spill_onto_second_sheet() {
    init_logger();
    let panels = vec![Panel::new(96.0, 30.0, "a"), Panel::new(96.0, 30.0, "b")];
    let layout = allocate(&panels, 96.0, 48.0).unwrap();

    assert_eq!(layout.n_sheets(), 2);
    for (sheet, id) in layout.sheets.iter().zip(["a", "b"]) {
        assert_eq!(sheet.placed.len(), 1);
        assert_eq!(sheet.placed[0].id, id);
        assert_eq!((sheet.placed[0].x, sheet.placed[0].y), (0.0, 0.0));
    }
}

#[test]
fn partial_layout_is_kept_when_exhausted() {
    let panels = vec![Panel::new(40.0, 20.0, "shelf"), Panel::new(100.0, 20.0, "wide")];
    let Err(PlanError::PackingExhausted {
        residual, layout, ..
    }) = allocate(&panels, 96.0, 48.0)
    else {
        panic!("wide panel cannot be placed");
    };
    assert_eq!(residual.len(), 1);
    assert_eq!(residual[0].id, "wide");
    assert_eq!(layout.n_sheets(), 1);
    assert_eq!(layout.sheets[0].placed[0].id, "shelf");
}

#[test]
fn attempts_count_rounds_actually_run() {
    // round 1 places the shelf, round 2 places nothing and ends the loop below the budget of 3
    let panels = vec![
        Panel::new(100.0, 20.0, "wide"),
        Panel::new(40.0, 60.0, "tall"),
        Panel::new(40.0, 20.0, "shelf"),
    ];
    let Err(PlanError::PackingExhausted {
        attempts,
        residual,
        layout,
    }) = allocate(&panels, 96.0, 48.0)
    else {
        panic!("wide and tall panels cannot be placed");
    };
    assert_eq!(attempts, 2);
    assert_eq!(residual.len(), 2);
    assert_eq!(layout.n_sheets(), 1);
}

#[test]
fn packer_reports_unplaced_panels() {
    let mut packer = RectanglePacker::new(96.0, 48.0);
    let result = packer.fit(&[
        Panel::new(60.0, 48.0, "side"),
        Panel::new(40.0, 10.0, "strip"),
        Panel::new(36.0, 40.0, "door"),
    ]);
    let ids = |placed: &[PlacedPanel]| placed.iter().map(|p| p.id.clone()).collect::<Vec<_>>();

    assert_eq!(ids(&result.placed), ["side", "door"]);
    assert_eq!(result.unplaced.len(), 1);
    assert_eq!(result.unplaced[0].id, "strip");
}

#[test]
fn kerf_separates_neighbouring_panels() {
    init_logger();
    let kerf = 0.125;
    let panels = vec![Panel::new(40.0, 20.0, "a"), Panel::new(40.0, 20.0, "b")];
    let layout = MultiSheetAllocator::new(96.0, 48.0)
        .with_kerf(kerf)
        .allocate(&panels)
        .unwrap();

    assert_eq!(layout.n_sheets(), 1);
    let placed = &layout.sheets[0].placed;
    assert_eq!((placed[0].x, placed[0].y), (0.0, 0.0));
    assert_eq!((placed[1].x, placed[1].y), (0.0, 20.125));
    assert_eq!(placed[1].y - placed[0].y_max(), kerf);
    //reported at their true size
    assert!(placed.iter().all(|p| p.width == 40.0 && p.height == 20.0));
}

#[test]
fn no_kerf_is_kept_at_the_sheet_edge() {
    let panels = vec![Panel::new(48.0, 48.0, "a"), Panel::new(48.0, 48.0, "b")];
    let layout = MultiSheetAllocator::new(96.125, 48.0)
        .with_kerf(0.125)
        .allocate(&panels)
        .unwrap();
    assert_eq!(layout.n_sheets(), 1);
    assert_eq!(layout.sheets[0].placed[1].x, 48.125);
}

#[test_case(0, 0.0; "seed_0_no_kerf")]
#[test_case(1, 0.0; "seed_1_no_kerf")]
#[test_case(2, 0.125; "seed_2_kerf")]
#[test_case(3, 0.125; "seed_3_kerf")]
fn random_panels_hold_invariants(seed: u64, kerf: f32) {
    init_logger();
    let mut rng = SmallRng::seed_from_u64(seed);
    let (width, height) = (96.0, 48.0);

    for _ in 0..20 {
        let panels = (0..rng.random_range(1..25))
            .map(|i| {
                Panel::new(
                    rng.random_range(1..=96) as f32,
                    rng.random_range(1..=48) as f32,
                    format!("p{i}"),
                )
            })
            .collect::<Vec<_>>();

        let layout = MultiSheetAllocator::new(width, height)
            .with_kerf(kerf)
            .allocate(&panels)
            .unwrap();

        assert!(layout_is_valid(&layout));
        assert!(layout_covers_panels(&layout, &panels));
        assert!(layout.n_sheets() <= panels.len());
        assert!(layout.sheets.iter().all(|s| !s.is_empty()));

        for sheet in &layout.sheets {
            for (i, a) in sheet.placed.iter().enumerate() {
                for b in &sheet.placed[i + 1..] {
                    let apart = a.x_max() + kerf <= b.x + 1e-3
                        || b.x_max() + kerf <= a.x + 1e-3
                        || a.y_max() + kerf <= b.y + 1e-3
                        || b.y_max() + kerf <= a.y + 1e-3;
                    assert!(apart, "{} and {} are closer than the kerf", a.id, b.id);
                }
            }
        }
    }
}
