use super::*;
use som_cli::extensions::import::write_csv_points;

fn get_common_args(out_result: &str) -> Vec<String> {
    ["train", "--grid-size", "3", "--iterations", "100", "--seed", "5", "--out-result", out_result]
        .into_iter()
        .map(|arg| arg.to_string())
        .collect()
}

fn read_report(path: &std::path::Path) -> serde_json::Value {
    serde_json::from_reader(BufReader::new(File::open(path).unwrap())).unwrap()
}

#[test]
fn can_train_map_on_generated_data() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let mut args = get_common_args(tmpfile.path().to_str().unwrap());
    args.extend(["--shape", "blobs", "--data-size", "200"].map(String::from));
    let matches = get_train_app().try_get_matches_from(args).unwrap();

    run_train(&matches, create_write_buffer).unwrap();

    let report = read_report(tmpfile.path());
    assert_eq!(report["parameters"]["gridSize"], 3);
    assert_eq!(report["parameters"]["dataSize"], 200);
    assert_eq!(report["result"]["iterations"], 100);
    assert_eq!(report["map"]["nodes"].as_array().map(|nodes| nodes.len()), Some(9));
}

#[test]
fn can_train_map_on_data_from_file() {
    let data_file = tempfile::NamedTempFile::new().unwrap();
    write_csv_points(data_file.reopen().unwrap(), &[vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]]).unwrap();
    let out_file = tempfile::NamedTempFile::new().unwrap();
    let mut args = get_common_args(out_file.path().to_str().unwrap());
    args.extend(["--data".to_string(), data_file.path().to_str().unwrap().to_string()]);
    let matches = get_train_app().try_get_matches_from(args).unwrap();

    run_train(&matches, create_write_buffer).unwrap();

    let report = read_report(out_file.path());
    assert_eq!(report["parameters"]["dataSize"], 2);
    assert_eq!(report["map"]["dimension"], 3);
}

#[test]
fn can_produce_same_report_with_same_seed() {
    let get_weights = || {
        let tmpfile = tempfile::NamedTempFile::new().unwrap();
        let matches = get_train_app().try_get_matches_from(get_common_args(tmpfile.path().to_str().unwrap())).unwrap();
        run_train(&matches, create_write_buffer).unwrap();

        read_report(tmpfile.path())["map"].clone()
    };

    assert_eq!(get_weights(), get_weights());
}

#[cfg(feature = "plots")]
#[test]
fn can_render_initial_and_final_maps() {
    let out_file = tempfile::NamedTempFile::new().unwrap();
    let plot_file = tempfile::NamedTempFile::new().unwrap();
    let initial_file = tempfile::NamedTempFile::new().unwrap();
    let mut args = get_common_args(out_file.path().to_str().unwrap());
    args.extend([
        "--data-size".to_string(),
        "100".to_string(),
        "--plot".to_string(),
        plot_file.path().to_str().unwrap().to_string(),
        "--plot-initial".to_string(),
        initial_file.path().to_str().unwrap().to_string(),
    ]);
    let matches = get_train_app().try_get_matches_from(args).unwrap();

    run_train(&matches, create_write_buffer).unwrap();

    for path in [plot_file.path(), initial_file.path()] {
        let svg = std::fs::read_to_string(path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("M=3 alpha0=0.02 d0=4 T=100"));
    }
}

#[test]
fn can_reject_data_with_shape() {
    let args = vec!["train", "--data", "points.csv", "--shape", "ring"];

    assert!(get_train_app().try_get_matches_from(args).is_err());
}

#[test]
fn can_return_error_on_invalid_parameters() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let mut args = get_common_args(tmpfile.path().to_str().unwrap());
    args.extend(["--learning-rate=-1", "--data-size", "10"].map(String::from));
    let matches = get_train_app().try_get_matches_from(args).unwrap();

    let result = run_train(&matches, create_write_buffer);

    assert!(result.unwrap_err().contains("cannot train map"));
}

#[test]
fn can_return_error_on_missing_data_file() {
    let args = vec!["train", "--data", "/non/existing/points.csv"];
    let matches = get_train_app().try_get_matches_from(args).unwrap();

    let result = run_train(&matches, create_write_buffer);

    assert!(result.unwrap_err().contains("cannot open data file"));
}
