//! End-to-end editing sessions driven through the string command interface.

use greylab_core::{EditError, Engine, Grid, Operation};

/// 4x15 zigzag pattern of ones on a zero background.
fn zigzag() -> Grid {
    let mut rows = vec![vec![0; 15]; 4];
    for (row, col) in [
        (0, 0),
        (1, 1),
        (2, 2),
        (3, 3),
        (2, 4),
        (1, 5),
        (2, 6),
        (3, 7),
        (2, 8),
        (1, 9),
        (0, 10),
    ] {
        rows[row][col] = 1;
    }
    Grid::from_rows(rows).unwrap()
}

#[test]
fn test_zigzag_session() {
    let original = zigzag();
    let mut engine = Engine::new(original.clone()).unwrap();

    engine.invoke("Flip X").unwrap();
    engine.invoke("Flip Y").unwrap();
    engine.invoke("Rotate").unwrap();
    assert_eq!(engine.current().dimensions(), (15, 4));

    engine.invoke("Scale 50%").unwrap();
    assert_eq!(engine.current().dimensions(), (7, 2));
    let scaled = engine.current().clone();
    assert_eq!(
        scaled.render_ascii(),
        concat!(
            " . .\n",
            " . .\n",
            " O .\n",
            " . O\n",
            " O .\n",
            " . O\n",
            " O .\n",
        )
    );

    engine.invoke("Mirror").unwrap();
    assert_eq!(engine.current().dimensions(), (7, 4));
    for row in 0..7 {
        assert_eq!(&engine.current().row(row)[..2], scaled.row(row));
    }
    assert_eq!(engine.current().row(3), &[0, 1, 1, 0]);

    engine.invoke("Reset").unwrap();
    assert_eq!(engine.current(), &original);
    assert_eq!(engine.history_len(), 5);
}

#[test]
fn test_zigzag_ascii_preview() {
    assert_eq!(
        zigzag().render_ascii(),
        concat!(
            " O . . . . . . . . . O . . . .\n",
            " . O . . . O . . . O . . . . .\n",
            " . . O . O . O . O . . . . . .\n",
            " . . . O . . . O . . . . . . .\n",
        )
    );
}

#[test]
fn test_undo_walks_back_through_shape_changes() {
    let original = zigzag();
    let mut engine = Engine::new(original.clone()).unwrap();

    engine.invoke("Rotate").unwrap();
    engine.invoke("Mirror").unwrap();
    engine.invoke("Scale 50%").unwrap();
    assert_eq!(engine.current().dimensions(), (7, 4));

    engine.invoke("Undo").unwrap();
    assert_eq!(engine.current().dimensions(), (15, 8));
    engine.invoke("Undo").unwrap();
    assert_eq!(engine.current().dimensions(), (15, 4));
    engine.invoke("Undo").unwrap();
    assert_eq!(engine.current(), &original);

    // The oldest snapshot is a floor
    engine.invoke("Undo").unwrap();
    assert_eq!(engine.current(), &original);
}

#[test]
fn test_scale_until_size_limit() {
    let mut engine = Engine::new(zigzag()).unwrap();

    engine.invoke("Scale 50%").unwrap();
    assert_eq!(engine.current().dimensions(), (2, 7));
    engine.invoke("Scale 50%").unwrap();
    assert_eq!(engine.current().dimensions(), (1, 3));

    let before = engine.current().clone();
    let history = engine.history_len();
    assert_eq!(
        engine.invoke("Scale 50%"),
        Err(EditError::SizeLimit { rows: 1, cols: 3 })
    );
    assert_eq!(engine.current(), &before);
    assert_eq!(engine.history_len(), history);
}

#[test]
fn test_every_catalog_name_is_invocable() {
    let mut engine = Engine::from_rows(vec![vec![10, 20, 30], vec![40, 50, 60]]).unwrap();
    for name in Engine::operation_names() {
        engine.invoke(name).unwrap();
    }
    // Reset is last in the catalog
    assert_eq!(engine.current(), engine.original());
}

#[test]
fn test_empty_name_leaves_grid_identical() {
    let mut engine = Engine::new(zigzag()).unwrap();
    engine.apply(Operation::Brighten).unwrap();
    let before = engine.current().samples().to_vec();

    assert_eq!(
        engine.invoke(""),
        Err(EditError::UnknownOperation(String::new()))
    );
    assert_eq!(engine.current().samples(), before.as_slice());
    assert_eq!(engine.history_len(), 1);
}

#[test]
fn test_brighten_then_darken_round_trip_midtones() {
    let mut engine = Engine::from_rows(vec![vec![20, 100, 200, 234]]).unwrap();
    engine.invoke("Brighten").unwrap();
    engine.invoke("Darken").unwrap();
    assert_eq!(engine.current(), engine.original());
}
