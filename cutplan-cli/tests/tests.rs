#[cfg(test)]
mod tests {
    use std::path::Path;

    use test_case::test_case;

    use cutplan::io::export::export_plan;
    use cutplan::io::import::import_job;
    use cutplan::io::svg::{cutlist_to_svg, sheet_to_svg};
    use cutplan::plan::Planner;
    use cutplan::util::assertions::{boards_within_capacity, layout_is_valid};
    use cutplan_cli::io;
    use cutplan_cli::io::output::PlanOutput;

    const CONFIG_PATH: &str = "../assets/config.json";

    #[test_case("../assets/work_bench.json"; "work_bench")]
    #[test_case("../assets/simple_table.json"; "simple_table")]
    fn test_job(job_path: &str) {
        let config = io::read_config(Path::new(CONFIG_PATH)).unwrap();
        let ext_job = io::read_job(Path::new(job_path)).unwrap();
        let job = import_job(&ext_job);

        let bom = Planner::new(config.clone()).plan(&job).unwrap();

        for ls in &job.linear {
            let cutlist = bom.cutlist(&ls.name).unwrap();
            let total: f32 = ls.requirements.expand().iter().map(|p| p.length).sum();
            assert!(boards_within_capacity(cutlist));
            assert_eq!(cutlist.pieces().count(), ls.requirements.total_quantity());
            assert!(cutlist.n_boards() >= (total / ls.stock_length).ceil() as usize);
            let _ = cutlist_to_svg(cutlist, config.svg_draw_options);
        }
        for ss in &job.sheets {
            let layout = bom.sheet_layout(&ss.name).unwrap();
            assert!(layout_is_valid(layout));
            for sheet in &layout.sheets {
                let _ = sheet_to_svg(sheet, config.svg_draw_options);
            }
        }
        for (item, count) in &job.hardware {
            assert_eq!(bom.hardware_count(item), *count);
        }

        let output = PlanOutput {
            plan: export_plan(&bom, &ext_job.labels),
            job: ext_job,
            config,
        };
        let json = serde_json::to_string(&output).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(reparsed["plan"]["lumber"].is_array());
        assert!(reparsed["linear"].is_array());
    }

    #[test]
    fn work_bench_sheet_goods() {
        let config = io::read_config(Path::new(CONFIG_PATH)).unwrap();
        let ext_job = io::read_job(Path::new("../assets/work_bench.json")).unwrap();
        let bom = Planner::new(config).plan(&import_job(&ext_job)).unwrap();

        //the shelf fits exactly below the table top, one kerf apart
        assert_eq!(bom.sheet_count("plywood"), 1);
        let plywood = &bom.sheet_layout("plywood").unwrap().sheets[0];
        assert_eq!(plywood.placed[1].id, "shelf");
        assert_eq!(plywood.placed[1].y, 36.125);
        assert_eq!(bom.sheet_count("peg_board"), 1);
        assert_eq!(bom.hardware_count("screws4"), 17);
    }

    #[test]
    fn simple_table_board_counts() {
        let config = io::read_config(Path::new(CONFIG_PATH)).unwrap();
        let ext_job = io::read_job(Path::new("../assets/simple_table.json")).unwrap();
        let bom = Planner::new(config).plan(&import_job(&ext_job)).unwrap();

        assert_eq!(bom.board_count("2x4"), 2);
        assert_eq!(bom.board_count("4x4"), 2);
        assert_eq!(bom.board_count("2x8"), 5);
    }
}
