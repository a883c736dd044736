use super::*;

#[test]
fn can_read_points_with_header_and_spaces() {
    let data = "X,Y\n0.1, 0.2\n 0.3,0.4\n";

    let points = read_csv_points(data.as_bytes()).unwrap();

    assert_eq!(points, vec![vec![0.1, 0.2], vec![0.3, 0.4]]);
}

#[test]
fn can_read_points_of_any_dimension() {
    let data = "X1,X2,X3\n1,2,3\n4,5,6\n";

    let points = read_csv_points(data.as_bytes()).unwrap();

    assert_eq!(points, vec![vec![1., 2., 3.], vec![4., 5., 6.]]);
}

#[test]
fn can_reject_non_numeric_value() {
    let data = "X,Y\n0.1,abc\n";

    let result = read_csv_points(data.as_bytes());

    assert!(result.unwrap_err().to_string().contains("abc"));
}

#[test]
fn can_reject_rows_with_different_length() {
    let data = "X,Y\n0.1,0.2\n0.3\n";

    assert!(read_csv_points(data.as_bytes()).is_err());
}

#[test]
fn can_write_points_which_can_be_read_back() {
    let points = vec![vec![0.25, 0.5], vec![0.75, 1.]];
    let mut buffer = Vec::new();

    write_csv_points(&mut buffer, points.as_slice()).unwrap();

    let text = String::from_utf8(buffer.clone()).unwrap();
    assert!(text.starts_with("X,Y\n"));
    assert_eq!(read_csv_points(buffer.as_slice()).unwrap(), points);
}

#[test]
fn can_write_header_for_higher_dimension() {
    let mut buffer = Vec::new();

    write_csv_points(&mut buffer, &[vec![1., 2., 3.]]).unwrap();

    assert!(String::from_utf8(buffer).unwrap().starts_with("X1,X2,X3\n"));
}
