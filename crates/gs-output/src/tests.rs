//! Integration tests for gs-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use gs_mobility::VehicleState;

    use crate::csv::CsvWriter;
    use crate::row::{TickSummaryRow, VehicleSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(vehicle_id: &str, tick: u64) -> VehicleSnapshotRow {
        VehicleSnapshotRow {
            tick,
            vehicle_id: vehicle_id.to_owned(),
            lng:        -58.401,
            lat:        -34.598,
            heading:    std::f64::consts::PI,
            state:      VehicleState::Enroute,
            pending:    3,
        }
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir.path().join("vehicle_snapshots.csv")),
            ["tick", "vehicle_id", "lng", "lat", "heading", "state", "pending"]
        );
        assert_eq!(
            headers(&dir.path().join("tick_summaries.csv")),
            ["tick", "elapsed_ms", "moved", "arrived"]
        );
    }

    #[test]
    fn missing_output_dir_is_created() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("ba");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("vehicle_snapshots.csv").exists());
    }

    #[test]
    fn snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row("SUV-031", 10), snap_row("HV-210", 10)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "10");
        assert_eq!(&rows[0][1], "SUV-031");
        assert_eq!(&rows[0][2], "-58.401000");
        assert_eq!(&rows[0][3], "-34.598000");
        assert_eq!(&rows[0][4], "3.1416");
        assert_eq!(&rows[0][5], "enroute");
        assert_eq!(&rows[0][6], "3");
        assert_eq!(&rows[1][1], "HV-210");
    }

    #[test]
    fn tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow { tick: 3, elapsed_ms: 300, moved: 2, arrived: 1 })
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "300");
        assert_eq!(&rows[0][2], "2");
        assert_eq!(&rows[0][3], "1");
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use gs_core::{GeoPoint, SimConfig, VehicleId, VehicleTypeId};
    use gs_grid::ManhattanRouter;
    use gs_mobility::VehicleUnit;
    use gs_sim::{Sim, SimBuilder};

    use crate::{
        CsvWriter, OutputError, OutputResult, OutputWriter, SimOutputObserver, TickSummaryRow,
        VehicleSnapshotRow,
    };

    fn small_sim(config: SimConfig) -> Sim<ManhattanRouter> {
        let units = vec![
            VehicleUnit::new("SUV-031", VehicleTypeId::LuxurySportSuv, -58.3835, -34.6027),
            VehicleUnit::new("HV-210",  VehicleTypeId::MobileCrane,    -58.4000, -34.6000),
        ];
        SimBuilder::new(config, units, ManhattanRouter).build().unwrap()
    }

    /// Collects rows in memory.
    #[derive(Default)]
    struct Memory {
        snapshots: Vec<VehicleSnapshotRow>,
        summaries: Vec<TickSummaryRow>,
        finished:  usize,
    }

    impl OutputWriter for Memory {
        fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
            self.snapshots.extend_from_slice(rows);
            Ok(())
        }
        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    /// Fails every write with a distinct message.
    #[derive(Default)]
    struct Broken {
        calls: usize,
    }

    impl OutputWriter for Broken {
        fn write_snapshots(&mut self, _rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("write {}", self.calls))))
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("write {}", self.calls))))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn rows_follow_ticks_and_snapshots() {
        let config = SimConfig { total_ticks: 6, output_interval_ticks: 2, ..SimConfig::default() };
        let mut sim = small_sim(config.clone());
        sim.request_route(&VehicleId::from("HV-210"), GeoPoint::new(-58.35, -34.59)).unwrap();

        let mut obs = SimOutputObserver::new(Memory::default(), &config);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mem = obs.into_writer();
        assert_eq!(mem.summaries.len(), 6);
        assert_eq!(mem.summaries[5].tick, 5);
        assert_eq!(mem.summaries[5].elapsed_ms, 500);
        assert!(mem.summaries.iter().all(|r| r.moved == 1 && r.arrived == 0));

        // Ticks 0, 2, 4 × two vehicles.
        assert_eq!(mem.snapshots.len(), 6);
        let ticks: Vec<u64> = mem.snapshots.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, [0, 0, 2, 2, 4, 4]);
        assert_eq!(mem.snapshots[1].vehicle_id, "HV-210");
        assert_eq!(mem.snapshots[1].state, gs_mobility::VehicleState::Enroute);
        assert_eq!(mem.snapshots[1].pending, 7);
        assert_eq!(mem.finished, 1);
    }

    #[test]
    fn first_error_kept() {
        let config = SimConfig { total_ticks: 3, output_interval_ticks: 1, ..SimConfig::default() };
        let mut sim = small_sim(config.clone());
        let mut obs = SimOutputObserver::new(Broken::default(), &config);
        sim.run(&mut obs).unwrap();

        let err = obs.take_error().expect("error stored");
        assert_eq!(err.to_string(), "I/O error: write 1");
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().unwrap();
        let config = SimConfig { total_ticks: 10, output_interval_ticks: 5, ..SimConfig::default() };
        let mut sim = small_sim(config.clone());

        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &config);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 4);
        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 10);
    }
}
