use morph::algorithms::extend::ExcludeSegment;
use morph::path::Command;
use morph::{interpolate_path, interpolate_path_with, InterpolationOptions};

const APPROX_MAX_T: f64 = 0.999999999999;

/// Splits a path into command letters and numbers, ignoring whitespace and commas.
fn path_items(path: &str) -> Vec<Result<f64, char>> {
    let mut items = Vec::new();
    let mut number = String::new();
    let flush = |number: &mut String, items: &mut Vec<Result<f64, char>>| {
        if !number.is_empty() {
            items.push(Ok(number.parse().unwrap()));
            number.clear();
        }
    };

    for c in path.chars() {
        if c.is_whitespace() || c == ',' {
            flush(&mut number, &mut items);
        } else if c.is_ascii_alphabetic() && c != 'e' {
            flush(&mut number, &mut items);
            items.push(Err(c));
        } else {
            number.push(c);
        }
    }
    flush(&mut number, &mut items);

    items
}

fn approximately_equal(path1: &str, path2: &str) -> bool {
    let epsilon = 0.001;
    let items1 = path_items(path1);
    let items2 = path_items(path2);

    if items1.len() != items2.len() {
        println!("{:?} != {:?}", path1, path2);
        return false;
    }

    for (a, b) in items1.iter().zip(items2.iter()) {
        let eq = match (a, b) {
            (Ok(a), Ok(b)) => (a - b).abs() <= epsilon,
            (Err(a), Err(b)) => a == b,
            _ => false,
        };

        if !eq {
            println!("{:?} != {:?}", path1, path2);
            return false;
        }
    }

    true
}

#[test]
fn same_length() {
    let a = "M0,0L10,10L100,100";
    let b = "M10,10L20,20L200,200";

    let interpolator = interpolate_path(Some(a), Some(b)).unwrap();

    assert_eq!(interpolator.sample(0.0), a);
    assert_eq!(interpolator.sample(1.0), b);
    assert_eq!(interpolator.sample(0.5), "M5,5L15,15L150,150");
}

#[test]
fn source_is_longer() {
    let a = "M0,0L10,10L100,100";
    let b = "M10,10L20,20";

    let interpolator = interpolate_path(Some(a), Some(b)).unwrap();

    assert_eq!(interpolator.sample(0.0), a);
    // Not extended anymore.
    assert_eq!(interpolator.sample(1.0), b);
    assert!(approximately_equal(
        &interpolator.sample(APPROX_MAX_T),
        "M10,10L15,15L20,20"
    ));
    // The 10,10-20,20 segment of the target is split at 15,15.
    assert_eq!(interpolator.sample(0.5), "M5,5L12.5,12.5L60,60");
}

#[test]
fn source_is_shorter() {
    let a = "M0,0L10,10";
    let b = "M10,10L20,20L200,200";

    let interpolator = interpolate_path(Some(a), Some(b)).unwrap();

    assert_eq!(interpolator.sample(0.0), "M0,0L5,5L10,10");
    assert!(approximately_equal(
        &interpolator.sample(APPROX_MAX_T),
        "M10,10L20,20L200,200"
    ));
    assert_eq!(interpolator.sample(0.5), "M5,5L12.5,12.5L105,105");
}

#[test]
fn single_command_source() {
    let a = "M0,0Z";
    let b = "M10,10L20,20L200,200";

    let interpolator = interpolate_path(Some(a), Some(b)).unwrap();

    assert_eq!(interpolator.sample(0.0), "M0,0L0,0L0,0");
    assert_eq!(interpolator.sample(1.0), b);
    assert_eq!(interpolator.sample(0.5), "M5,5L10,10L100,100");
}

#[test]
fn single_command_target() {
    let a = "M0,0L10,10L100,100";
    let b = "M10,10Z";

    let interpolator = interpolate_path(Some(a), Some(b)).unwrap();

    assert_eq!(interpolator.sample(0.0), a);
    assert_eq!(interpolator.sample(1.0), b);
    assert_eq!(interpolator.sample(0.5), "M5,5L10,10L55,55");
}

#[test]
fn shrink_to_point() {
    let a = "M0,0";
    let b = "M10,10L20,20L30,30";

    let interpolator = interpolate_path(Some(a), Some(b)).unwrap();

    assert_eq!(interpolator.sample(0.0), "M0,0L0,0L0,0");
    assert_eq!(interpolator.sample(1.0), b);
    assert_eq!(interpolator.sample(0.5), "M5,5L10,10L15,15");
}

#[test]
fn missing_source() {
    let b = "M10,10L20,20L200,200";

    let interpolator = interpolate_path(None, Some(b)).unwrap();

    assert_eq!(interpolator.sample(0.0), "M10,10L10,10L10,10");
    assert_eq!(interpolator.sample(1.0), b);
    assert_eq!(interpolator.sample(0.5), "M10,10L15,15L105,105");
}

#[test]
fn missing_target() {
    let a = "M0,0L10,10L100,100";

    let interpolator = interpolate_path(Some(a), None).unwrap();

    assert_eq!(interpolator.sample(0.0), a);
    assert_eq!(interpolator.sample(1.0), "");
    assert_eq!(interpolator.sample(0.5), "M0,0L5,5L50,50");
}

#[test]
fn missing_both() {
    let interpolator = interpolate_path(None, None).unwrap();

    assert_eq!(interpolator.sample(0.0), "");
    assert_eq!(interpolator.sample(0.5), "");
    assert_eq!(interpolator.sample(1.0), "");

    // Paths without commands are treated the same way.
    let interpolator = interpolate_path(Some(""), Some("  Z ")).unwrap();
    assert_eq!(interpolator.sample(0.5), "");
    assert_eq!(interpolator.sample(1.0), "");
}

#[test]
fn both_closed() {
    let a = "M0,0Z";
    let b = "M10,10L20,20Z";

    let interpolator = interpolate_path(Some(a), Some(b)).unwrap();

    assert_eq!(interpolator.sample(0.0), "M0,0L0,0Z");
    assert_eq!(interpolator.sample(1.0), b);
    assert_eq!(interpolator.sample(0.5), "M5,5L10,10Z");
}

#[test]
fn missing_source_closed_target() {
    let b = "M10,10L20,20Z";

    let interpolator = interpolate_path(None, Some(b)).unwrap();

    assert_eq!(interpolator.sample(0.0), "M10,10L10,10Z");
    assert_eq!(interpolator.sample(1.0), b);
    assert_eq!(interpolator.sample(0.5), "M10,10L15,15Z");
}

#[test]
fn one_closed_path() {
    let interpolator = interpolate_path(Some("M0,0L10,10Z"), Some("M10,10L20,20")).unwrap();

    for &t in &[0.0, 0.25, 0.5, APPROX_MAX_T] {
        assert!(!interpolator.sample(t).contains('Z'));
    }

    let interpolator = interpolate_path(Some("M0,0L10,10"), Some("M10,10L20,20Z")).unwrap();

    for &t in &[0.0, 0.25, 0.5, APPROX_MAX_T] {
        assert!(!interpolator.sample(t).contains('Z'));
    }
    assert_eq!(interpolator.sample(1.0), "M10,10L20,20Z");
}

#[test]
fn all_command_letters() {
    let a = "M0,0m0,0L0,0l0,0H0V0Q0,0,0,0q0,0,0,0C0,0,0,0,0,0c0,0,0,0,0,0T0,0t0,0\
             S0,0,0,0s0,0,0,0A0,0,0,0,0,0,0";
    let b = "M4,4m4,4L4,4l4,4H4V4Q4,4,4,4q4,4,4,4C4,4,4,4,4,4c4,4,4,4,4,4T4,4t4,4\
             S4,4,4,4s4,4,4,4A4,4,1,1,1,4,4";

    let interpolator = interpolate_path(Some(a), Some(b)).unwrap();

    assert_eq!(interpolator.sample(0.0), a);
    assert_eq!(interpolator.sample(1.0), b);
    assert_eq!(
        interpolator.sample(0.5),
        "M2,2m2,2L2,2l2,2H2V2Q2,2,2,2q2,2,2,2C2,2,2,2,2,2c2,2,2,2,2,2\
         T2,2t2,2S2,2,2,2s2,2,2,2A2,2,0.5,0.5,0.5,2,2"
    );
}

#[test]
fn type_conversion() {
    let a = "M2,2 L3,3          C4,4,4,4,4,4 C5,5,5,5,5,5  L6,6  L7,7";
    let b = "M4,4 C5,5,5,5,5,5  L6,6         S7,7,7,7      H8    V9";

    let interpolator = interpolate_path(Some(a), Some(b)).unwrap();

    assert_eq!(interpolator.sample(0.0), "M2,2C3,3,3,3,3,3L4,4S5,5,5,5H6V7");
    assert_eq!(interpolator.sample(1.0), b);
    assert_eq!(interpolator.sample(0.5), "M3,3C4,4,4,4,4,4L5,5S6,6,6,6H7V8");
}

#[test]
fn curves_of_different_length() {
    let a = "M0,0C1,1,2,2,4,4C3,3,4,4,6,6";
    let b = "M2,2C5,5,6,6,4,4C6,6,7,7,5,5C8,8,9,9,6,6C10,10,11,11,7,7";

    let interpolator = interpolate_path(Some(a), Some(b)).unwrap();

    assert_eq!(
        interpolator.sample(0.0),
        "M0,0C0.5,0.5,1,1,1.625,1.625C2.25,2.25,3,3,4,4C3.5,3.5,3.5,3.5,3.875,3.875C4.25,4.25,5,5,6,6"
    );
    assert_eq!(interpolator.sample(1.0), b);
    assert_eq!(
        interpolator.sample(0.5),
        "M1,1C2.75,2.75,3.5,3.5,2.8125,2.8125C4.125,4.125,5,5,4.5,4.5\
         C5.75,5.75,6.25,6.25,4.9375,4.9375C7.125,7.125,8,8,6.5,6.5"
    );
}

#[test]
fn spaces_after_commands() {
    let a = "M 0 0 L 10 10 L 100 100";
    let b = "M10,10L20,20";

    let interpolator = interpolate_path(Some(a), Some(b)).unwrap();

    assert_eq!(interpolator.sample(0.0), "M0,0L10,10L100,100");
    assert_eq!(interpolator.sample(1.0), b);
    assert!(approximately_equal(
        &interpolator.sample(APPROX_MAX_T),
        "M10,10L15,15L20,20"
    ));
    assert_eq!(interpolator.sample(0.5), "M5,5L12.5,12.5L60,60");
}

#[test]
fn negative_numbers() {
    let a = "M0,0L0,0";
    let b = "M-10,-10L20,20";

    let interpolator = interpolate_path(Some(a), Some(b)).unwrap();

    assert_eq!(interpolator.sample(0.0), "M0,0L0,0");
    assert_eq!(interpolator.sample(1.0), b);
    assert_eq!(interpolator.sample(0.5), "M-5,-5L10,10");
}

#[test]
fn leading_spaces() {
    let a = "       M0,0L10,10L100,100";
    let b = "\n\n        \tM10,10L20,20L200,200";

    let interpolator = interpolate_path(Some(a), Some(b)).unwrap();

    assert_eq!(interpolator.sample(0.0), "M0,0L10,10L100,100");
    assert_eq!(interpolator.sample(1.0), b);
    assert_eq!(interpolator.sample(0.5), "M5,5L15,15L150,150");
}

#[test]
fn exclude_segment() {
    // An area chart: the vertical edge on the left should not be split.
    let a = "M0,0L0,10L10,10";
    let b = "M0,0L0,10L10,10L20,10L30,10";
    let vertical = |start: &Command, end: &Command| start.x() == end.x();

    let interpolator = interpolate_path(Some(a), Some(b)).unwrap();
    assert_eq!(interpolator.sample(0.0), "M0,0L0,5L0,10L5,10L10,10");

    let options = InterpolationOptions::DEFAULT.with_exclude_segment(&vertical);
    let interpolator = interpolate_path_with(Some(a), Some(b), &options).unwrap();
    assert!(approximately_equal(
        &interpolator.sample(0.0),
        "M0,0L0,10L3.333,10L6.667,10L10,10"
    ));
    assert_eq!(interpolator.sample(1.0), b);
}

#[test]
fn exclude_segment_trait_object() {
    let exclude: Box<ExcludeSegment> = Box::new(|_: &Command, end: &Command| end.is_move_to());
    let options = InterpolationOptions::DEFAULT.with_exclude_segment(&*exclude);

    let interpolator =
        interpolate_path_with(Some("M0,0L10,0"), Some("M0,0L5,0L10,0"), &options).unwrap();
    assert_eq!(interpolator.sample(0.0), "M0,0L5,0L10,0");
}

#[test]
fn into_fn() {
    let f = interpolate_path(Some("M0,0L10,10"), Some("M10,10L20,20"))
        .unwrap()
        .into_fn();

    assert_eq!(f(0.5), "M5,5L15,15");
    assert_eq!(f(1.0), "M10,10L20,20");
}

#[test]
fn sample_from_several_threads() {
    let interpolator = std::sync::Arc::new(
        interpolate_path(Some("M0,0L10,10"), Some("M10,10L20,20L30,30")).unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let interpolator = interpolator.clone();
            std::thread::spawn(move || interpolator.sample(i as f64 / 4.0))
        })
        .collect();

    let frames: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(frames[0], "M0,0L5,5L10,10");
    assert_eq!(frames[2], "M5,5L12.5,12.5L20,20");
}

#[test]
fn invalid_command() {
    assert!(interpolate_path(Some("M0,0L1,1"), Some("M0,0X1,1")).is_err());
    assert!(interpolate_path(Some("10,10"), None).is_err());
}
