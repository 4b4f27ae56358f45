use morph::path::{Command, Params, PathData};
use morph::{
    interpolate_path, interpolate_path_data, interpolate_path_with, InterpolationOptions,
};

const APPROX_MAX_T: f64 = 0.999999999999;

fn path(src: &str) -> PathData {
    src.parse().unwrap()
}

fn approximately_equal(path1: &PathData, path2: &PathData) -> bool {
    let epsilon = 0.001;

    if path1.len() != path2.len() || path1.closed != path2.closed {
        println!("{:?} != {:?}", path1, path2);
        return false;
    }

    for (a, b) in path1.iter().zip(path2.iter()) {
        let eq = a.has_same_type(b)
            && a.values()
                .iter()
                .zip(b.values().iter())
                .all(|(a, b)| (a - b).abs() <= epsilon);

        if !eq {
            println!("{:?} != {:?}", path1, path2);
            return false;
        }
    }

    true
}

fn sample(a: Option<&PathData>, b: Option<&PathData>, t: f64) -> PathData {
    interpolate_path_data(a, b, &InterpolationOptions::DEFAULT).sample(t)
}

#[test]
fn same_length() {
    let a = path("M0,0L10,10L100,100");
    let b = path("M10,10L20,20L200,200");

    assert_eq!(sample(Some(&a), Some(&b), 0.0), a);
    assert_eq!(sample(Some(&a), Some(&b), 1.0), b);
    assert_eq!(
        sample(Some(&a), Some(&b), 0.5),
        PathData::from_commands(
            vec![
                Command::move_to(5.0, 5.0),
                Command::line_to(15.0, 15.0),
                Command::line_to(150.0, 150.0),
            ],
            false
        )
    );
}

#[test]
fn source_is_longer() {
    let a = path("M0,0L10,10L100,100");
    let b = path("M10,10L20,20");

    assert_eq!(sample(Some(&a), Some(&b), 0.0), a);
    assert_eq!(sample(Some(&a), Some(&b), 1.0), b);
    assert!(approximately_equal(
        &sample(Some(&a), Some(&b), APPROX_MAX_T),
        &path("M10,10L15,15L20,20")
    ));
    assert_eq!(
        sample(Some(&a), Some(&b), 0.5),
        path("M5,5L12.5,12.5L60,60")
    );
}

#[test]
fn source_is_shorter() {
    let a = path("M0,0L10,10");
    let b = path("M10,10L20,20L200,200");

    assert_eq!(sample(Some(&a), Some(&b), 0.0), path("M0,0L5,5L10,10"));
    assert!(approximately_equal(
        &sample(Some(&a), Some(&b), APPROX_MAX_T),
        &b
    ));
    assert_eq!(
        sample(Some(&a), Some(&b), 0.5),
        path("M5,5L12.5,12.5L105,105")
    );
}

#[test]
fn single_command() {
    let a = path("M0,0Z");
    let b = path("M10,10L20,20L200,200");

    assert_eq!(sample(Some(&a), Some(&b), 0.0), path("M0,0L0,0L0,0"));
    assert_eq!(sample(Some(&a), Some(&b), 1.0), b);
    assert_eq!(
        sample(Some(&a), Some(&b), 0.5),
        path("M5,5L10,10L100,100")
    );

    let a = path("M0,0L10,10L100,100");
    let b = path("M10,10Z");

    assert_eq!(sample(Some(&a), Some(&b), 0.0), a);
    assert_eq!(sample(Some(&a), Some(&b), 1.0), b);
    assert_eq!(sample(Some(&a), Some(&b), 0.5), path("M5,5L10,10L55,55"));
}

#[test]
fn missing_paths() {
    let a = path("M0,0L10,10L100,100");
    let b = path("M10,10L20,20L200,200");

    assert_eq!(sample(None, Some(&b), 0.0), path("M10,10L10,10L10,10"));
    assert_eq!(sample(None, Some(&b), 1.0), b);
    assert_eq!(sample(None, Some(&b), 0.5), path("M10,10L15,15L105,105"));

    assert_eq!(sample(Some(&a), None, 0.0), a);
    assert_eq!(sample(Some(&a), None, 1.0), PathData::new());
    assert_eq!(sample(Some(&a), None, 0.5), path("M0,0L5,5L50,50"));

    for &t in &[0.0, 0.5, 1.0] {
        assert_eq!(sample(None, None, t), PathData::new());
    }
}

#[test]
fn closed_paths() {
    let a = path("M0,0Z");
    let b = path("M10,10L20,20Z");

    assert_eq!(sample(Some(&a), Some(&b), 0.0), path("M0,0L0,0Z"));
    assert_eq!(sample(Some(&a), Some(&b), 1.0), b);
    assert_eq!(sample(Some(&a), Some(&b), 0.5), path("M5,5L10,10Z"));

    assert_eq!(sample(None, Some(&b), 0.0), path("M10,10L10,10Z"));
    assert_eq!(sample(None, Some(&b), 0.5), path("M10,10L15,15Z"));

    let open = path("M10,10L20,20");
    assert!(!sample(Some(&a), Some(&open), 0.5).closed);
    assert!(!sample(Some(&open), Some(&b), 0.5).closed);
}

#[test]
fn type_conversion() {
    let a = path("M2,2L3,3C4,4,4,4,4,4C5,5,5,5,5,5L6,6L7,7");
    let b = path("M4,4C5,5,5,5,5,5L6,6S7,7,7,7H8V9");

    assert_eq!(
        sample(Some(&a), Some(&b), 0.0),
        path("M2,2C3,3,3,3,3,3L4,4S5,5,5,5H6V7")
    );
    assert_eq!(
        sample(Some(&a), Some(&b), 0.5),
        path("M3,3C4,4,4,4,4,4L5,5S6,6,6,6H7V8")
    );
}

#[test]
fn move_to_targets() {
    // Commands are never converted into move-to commands by the reconciler, but
    // the parameters are still matched when interpolating.
    let a = path("M0,0C1,1,2,2,3,3L4,4");
    let b = path("M10,10M20,20L30,30");

    let mid = sample(Some(&a), Some(&b), 0.5);
    assert_eq!(mid, path("M5,5M11.5,11.5L17,17"));
    assert_eq!(
        mid.commands[1].params,
        Params::MoveTo { x: 11.5, y: 11.5 }
    );
}

#[test]
fn matches_text_interpolation() {
    let cases = [
        ("M0,0L10,10L100,100", "M10,10L20,20"),
        ("M0,0", "M10,10L20,20L30,30"),
        ("M0,0Z", "M10,10L20,20Z"),
        (
            "M2,2L3,3C4,4,4,4,4,4C5,5,5,5,5,5L6,6L7,7",
            "M4,4C5,5,5,5,5,5L6,6S7,7,7,7H8V9",
        ),
        (
            "M0,0C1,1,2,2,4,4C3,3,4,4,6,6",
            "M2,2C5,5,6,6,4,4C6,6,7,7,5,5C8,8,9,9,6,6C10,10,11,11,7,7",
        ),
        (
            "M0,0m0,0L0,0l0,0H0V0Q0,0,0,0q0,0,0,0C0,0,0,0,0,0c0,0,0,0,0,0A0,0,0,0,0,0,0",
            "M4,4m4,4L4,4l4,4H4V4Q4,4,4,4q4,4,4,4C4,4,4,4,4,4c4,4,4,4,4,4A4,4,1,1,1,4,4",
        ),
    ];

    for &(a, b) in &cases {
        let text = interpolate_path(Some(a), Some(b)).unwrap();
        let data = interpolate_path_data(
            Some(&path(a)),
            Some(&path(b)),
            &InterpolationOptions::DEFAULT,
        );

        for &t in &[0.0, 0.25, 0.5, 0.75] {
            assert_eq!(data.sample(t).to_string(), text.sample(t));
        }
    }
}

#[test]
fn exclude_segment() {
    let a = path("M0,0L0,10L10,10");
    let b = path("M0,0L0,10L10,10L20,10L30,10");
    let vertical = |start: &Command, end: &Command| start.x() == end.x();

    let options = InterpolationOptions::DEFAULT.with_exclude_segment(&vertical);
    let interpolator = interpolate_path_data(Some(&a), Some(&b), &options);

    // The vertical edge is kept as is, the horizontal one receives the points.
    assert!(approximately_equal(
        &interpolator.sample(0.0),
        &path("M0,0L0,10L3.333,10L6.667,10L10,10")
    ));
    assert!(approximately_equal(
        &interpolator.sample(0.5),
        &path("M0,0L0,10L6.667,10L13.333,10L20,10")
    ));
    assert_eq!(interpolator.sample(1.0), b);

    let text = interpolate_path_with(
        Some("M0,0L0,10L10,10"),
        Some("M0,0L0,10L10,10L20,10L30,10"),
        &options,
    )
    .unwrap();
    for &t in &[0.0, 0.25, 0.5, 0.75] {
        assert_eq!(interpolator.sample(t).to_string(), text.sample(t));
    }
}

#[test]
fn into_fn() {
    let a = path("M0,0L10,10");
    let b = path("M10,10L20,20");
    let f = interpolate_path_data(Some(&a), Some(&b), &InterpolationOptions::DEFAULT).into_fn();

    assert_eq!(f(0.5), path("M5,5L15,15"));
    assert_eq!(f(1.0), b);
}
