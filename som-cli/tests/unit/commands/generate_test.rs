use super::*;
use som_cli::extensions::import::read_csv_points;
use std::io::BufReader;

#[test]
fn can_generate_data_from_args() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let out_path = tmpfile.path().to_str().unwrap();
    let args = vec!["generate", "ring", "--size", "50", "--seed", "7", "--out-result", out_path];
    let matches = get_generate_app().try_get_matches_from(args).unwrap();

    run_generate(&matches, create_write_buffer).unwrap();

    let points = read_csv_points(BufReader::new(tmpfile.reopen().unwrap())).unwrap();
    assert_eq!(points.len(), 50);
    assert!(points.iter().all(|point| point.len() == 2));
}

#[test]
fn can_reject_unknown_shape() {
    let args = vec!["generate", "circle", "--size", "10"];

    assert!(get_generate_app().try_get_matches_from(args).is_err());
}

#[test]
fn can_return_error_on_invalid_size() {
    let args = vec!["generate", "square", "--size", "ten"];
    let matches = get_generate_app().try_get_matches_from(args).unwrap();

    let result = run_generate(&matches, create_write_buffer);

    assert!(result.unwrap_err().contains("data size"));
}
