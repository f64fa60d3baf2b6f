use super::*;

#[test]
fn test_recall_unweighted() {
    let y_true = [1, 1, 1, 1, 0, 0];
    let y_pred = [0, 1, 1, 1, 0, 1];
    let weights = [1.0; 6];
    let tpr = recall_score(&y_true, &y_pred, &weights, 1, ZeroDivision::Nan);
    assert!((tpr - 0.75).abs() < 1e-6);
}

#[test]
fn test_recall_negative_class() {
    // pos_label = 0 measures the true negative rate.
    let y_true = [1, 1, 1, 1, 0, 0];
    let y_pred = [0, 1, 1, 1, 0, 1];
    let weights = [1.0; 6];
    let tnr = recall_score(&y_true, &y_pred, &weights, 0, ZeroDivision::Nan);
    assert!((tnr - 0.5).abs() < 1e-6);
}

#[test]
fn test_recall_weighted() {
    // Doubling the weight of the one miss drops recall from 3/4 to 3/5.
    let y_true = [1, 1, 1, 1];
    let y_pred = [0, 1, 1, 1];
    let weights = [2.0, 1.0, 1.0, 1.0];
    let tpr = recall_score(&y_true, &y_pred, &weights, 1, ZeroDivision::Nan);
    assert!((tpr - 0.6).abs() < 1e-6);
}

#[test]
fn test_recall_zero_weight_sample_ignored() {
    let y_true = [1, 1];
    let y_pred = [0, 1];
    let weights = [0.0, 1.0];
    let tpr = recall_score(&y_true, &y_pred, &weights, 1, ZeroDivision::Nan);
    assert!((tpr - 1.0).abs() < 1e-6);
}

#[test]
fn test_recall_zero_division_policies() {
    // No actual positives in the slice.
    let y_true = [0, 0, 0];
    let y_pred = [0, 1, 0];
    let weights = [1.0; 3];
    assert!(recall_score(&y_true, &y_pred, &weights, 1, ZeroDivision::Nan).is_nan());
    assert_eq!(
        recall_score(&y_true, &y_pred, &weights, 1, ZeroDivision::Zero),
        0.0
    );
    assert_eq!(
        recall_score(&y_true, &y_pred, &weights, 1, ZeroDivision::One),
        1.0
    );
}

#[test]
fn test_recall_empty_slice() {
    assert!(recall_score(&[], &[], &[], 1, ZeroDivision::Nan).is_nan());
}

#[test]
fn test_zero_division_default_is_nan() {
    assert_eq!(ZeroDivision::default(), ZeroDivision::Nan);
    assert!(ZeroDivision::default().value().is_nan());
}

#[test]
fn test_base_rate_unweighted() {
    let y_pred = [1, 1, 1, 0];
    assert!((base_rate(&y_pred, &[1.0; 4]) - 0.75).abs() < 1e-6);
}

#[test]
fn test_base_rate_weighted() {
    let y_pred = [1, 0];
    let weights = [3.0, 1.0];
    assert!((base_rate(&y_pred, &weights) - 0.75).abs() < 1e-6);
}

#[test]
fn test_base_rate_ignores_nothing_but_weights() {
    // All-zero predictions are a legal slice once upstream validation ran
    // on the full vector.
    let y_pred = [0, 0, 0];
    assert_eq!(base_rate(&y_pred, &[1.0; 3]), 0.0);
}

#[test]
fn test_base_rate_empty_slice_is_nan() {
    assert!(base_rate(&[], &[]).is_nan());
}

#[test]
fn test_base_rate_zero_mass_is_nan() {
    assert!(base_rate(&[1, 0], &[0.0, 0.0]).is_nan());
}

#[test]
fn test_zero_division_serde_round_trip() {
    let json = serde_json::to_string(&ZeroDivision::Zero).unwrap();
    let back: ZeroDivision = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ZeroDivision::Zero);
}
