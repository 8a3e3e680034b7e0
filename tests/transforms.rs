use grey_processor::transform::{self, Transform};
use grey_processor::{GreyImage, Sample};

// Helper to build a small non-symmetric test image
fn gradient(rows: usize, cols: usize) -> GreyImage {
    let data = (0..rows * cols).map(|i| (i * 37 % 256) as Sample).collect();
    GreyImage::new(rows, cols, data).unwrap()
}

fn shapes() -> Vec<(usize, usize)> {
    vec![(1, 1), (1, 4), (3, 1), (2, 2), (3, 5), (4, 4), (5, 3), (6, 7)]
}

#[test]
fn test_lighten_saturates_at_white() {
    let source = GreyImage::new(1, 256, (0..=255).collect()).unwrap();
    let lightened = transform::lighten(source.clone());
    for (before, after) in source.as_slice().iter().zip(lightened.as_slice()) {
        assert_eq!(u16::from(*after), (u16::from(*before) + 20).min(255));
    }
}

#[test]
fn test_fade_moves_toward_midpoint() {
    let source = GreyImage::new(1, 256, (0..=255).collect()).unwrap();
    let faded = transform::fade(source.clone());

    for (&before, &after) in source.as_slice().iter().zip(faded.as_slice()) {
        let before = i32::from(before);
        let after = i32::from(after);
        let distance_before = (before - 128).abs();
        let distance_after = (after - 128).abs();

        // Never moves away and never crosses the midpoint
        assert!(distance_after <= distance_before, "{} -> {}", before, after);
        assert!((before - 128) * (after - 128) >= 0, "{} -> {}", before, after);
        // Rounding leaves samples within two levels of 128 in place
        if distance_before >= 3 {
            assert!(distance_after < distance_before, "{} -> {}", before, after);
        } else {
            assert_eq!(after, before);
        }
    }
}

#[test]
fn test_lighten_then_fade_scenario() {
    let start = GreyImage::default();
    let lightened = transform::lighten(start);
    assert_eq!(
        lightened.to_rows(),
        vec![
            vec![100, 100, 100],
            vec![100, 220, 100],
            vec![100, 100, 100]
        ]
    );

    let faded = transform::fade(lightened);
    assert_eq!(faded[(1, 1)], 202);
    // 100 is 28 below 128: 28 * 0.2 = 5.6 rounds to 6
    assert_eq!(faded[(0, 0)], 106);
}

#[test]
fn test_flip_horizontal_is_involution() {
    for (rows, cols) in shapes() {
        let image = gradient(rows, cols);
        let flipped = transform::flip_horizontal(image.clone());
        for r in 0..rows {
            for c in 0..cols {
                assert_eq!(flipped[(r, c)], image[(r, cols - 1 - c)]);
            }
        }
        assert_eq!(transform::flip_horizontal(flipped), image);
    }
}

#[test]
fn test_shift_vertical_cycles_back() {
    for (rows, cols) in shapes() {
        let image = gradient(rows, cols);
        let mut shifted = image.clone();
        for step in 1..=rows {
            shifted = transform::shift_vertical(shifted);
            if step < rows && rows > 1 {
                assert_ne!(shifted, image, "{}x{} after {} shifts", rows, cols, step);
            }
        }
        assert_eq!(shifted, image);
    }
}

#[test]
fn test_shift_vertical_keeps_every_row() {
    let image = gradient(4, 3);
    let shifted = transform::shift_vertical(image.clone());
    assert_eq!(shifted.row(0), image.row(3));
    for r in 1..4 {
        assert_eq!(shifted.row(r), image.row(r - 1));
    }
}

#[test]
fn test_rotate_180_is_involution() {
    for (rows, cols) in shapes() {
        let image = gradient(rows, cols);
        let rotated = transform::rotate_180(image.clone());
        assert_eq!(rotated.dimensions(), image.dimensions());
        for r in 0..rows {
            for c in 0..cols {
                assert_eq!(rotated[(r, c)], image[(rows - 1 - r, cols - 1 - c)]);
            }
        }
        assert_eq!(transform::rotate_180(rotated), image);
    }
}

#[test]
fn test_rotate_90_formula_and_full_turn() {
    for (rows, cols) in shapes() {
        let image = gradient(rows, cols);
        let rotated = transform::rotate_90(image.clone());
        assert_eq!(rotated.dimensions(), (cols, rows));
        for r in 0..cols {
            for c in 0..rows {
                assert_eq!(rotated[(r, c)], image[(rows - 1 - c, r)]);
            }
        }

        let full_turn = (0..3).fold(rotated, |acc, _| transform::rotate_90(acc));
        assert_eq!(full_turn, image);
    }
}

#[test]
fn test_two_quarter_turns_make_half_turn() {
    let image = gradient(3, 5);
    let twice = transform::rotate_90(transform::rotate_90(image.clone()));
    assert_eq!(twice, transform::rotate_180(image));
}

#[test]
fn test_expand_replicates_quadrant() {
    for (rows, cols) in shapes() {
        let image = gradient(rows, cols);
        let expanded = transform::expand(image.clone());
        assert_eq!(expanded.dimensions(), image.dimensions());

        for y in 0..rows / 2 {
            for x in 0..cols / 2 {
                let source = image[(y, x)];
                assert_eq!(expanded[(2 * y, 2 * x)], source);
                assert_eq!(expanded[(2 * y + 1, 2 * x)], source);
                assert_eq!(expanded[(2 * y, 2 * x + 1)], source);
                assert_eq!(expanded[(2 * y + 1, 2 * x + 1)], source);
            }
        }
    }
}

#[test]
fn test_merge_only_touches_shared_region() {
    let a = gradient(4, 6);
    let b = GreyImage::filled(5, 3, 200).unwrap();
    let merged = transform::merge(a.clone(), Some(&b));

    assert_eq!(merged.dimensions(), a.dimensions());
    for r in 0..4 {
        for c in 0..6 {
            if c < 3 {
                let expected = (u16::from(a[(r, c)]) + 200) / 2;
                assert_eq!(u16::from(merged[(r, c)]), expected);
            } else {
                assert_eq!(merged[(r, c)], a[(r, c)]);
            }
        }
    }
}

#[test]
fn test_merge_floors_average() {
    let a = GreyImage::from_rows(vec![vec![255, 0, 3]]).unwrap();
    let b = GreyImage::from_rows(vec![vec![254, 1, 4]]).unwrap();
    let merged = transform::merge(a, Some(&b));
    assert_eq!(merged.to_rows(), vec![vec![254, 0, 3]]);
}

#[test]
fn test_merge_without_second_image_is_noop() {
    let a = gradient(3, 3);
    assert_eq!(transform::merge(a.clone(), None), a);
}

#[test]
fn test_transform_enum_matches_functions() {
    let image = gradient(3, 4);
    assert_eq!(
        Transform::Lighten.apply(image.clone()),
        transform::lighten(image.clone())
    );
    assert_eq!(
        Transform::Rotate90.apply(image.clone()),
        transform::rotate_90(image.clone())
    );
    assert_eq!(
        Transform::Expand.apply(image.clone()),
        transform::expand(image)
    );
}
