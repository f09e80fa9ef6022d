use std::fs;

use nalgebra::Point3;

use crate::model::body::{BodyParameters, MoonParameters, RingParameters};

/// Reads a whitespace-separated body table. One body per line:
///
/// ```text
/// name radius color distance orbital_speed spin_speed tilt ring moons
/// ```
///
/// Colors are rrggbb hex, `-` stands for "none", `ring` is
/// `inner,outer,color`, and `moons` is a `;`-separated list of
/// `radius,distance,speed[,color]`. Blank lines and `#` comments are
/// skipped. Anything malformed panics; the table is trusted input.
pub fn read_file(filename: &str) -> Vec<BodyParameters> {
    parse_bodies(&fs::read_to_string(filename).unwrap())
}

pub fn parse_bodies(text: &str) -> Vec<BodyParameters> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse_body_line)
        .collect()
}

fn parse_body_line(line: &str) -> BodyParameters {
    let mut fields = line.split_ascii_whitespace();

    macro_rules! next_string {
        () => {
            fields.next().unwrap()
        };
    }

    macro_rules! next_f32 {
        () => {
            fields.next().unwrap().parse::<f32>().unwrap()
        };
    }

    let name = next_string!();
    let radius = next_f32!();
    let color = parse_color(next_string!());
    let distance = next_f32!();
    let orbital_speed = next_f32!();
    let spin_speed = next_f32!();

    let mut body = BodyParameters::new(name, radius, color, distance, orbital_speed, spin_speed)
        .with_tilt(next_f32!());

    let ring = next_string!();
    if ring != "-" {
        let ring = parse_ring(ring);
        body = body.with_ring(ring.inner_radius, ring.outer_radius, ring.color);
    }

    let moons = next_string!();
    if moons != "-" {
        for moon in moons.split(';') {
            body = body.with_moon(parse_moon(moon));
        }
    }

    body
}

fn parse_ring(entry: &str) -> RingParameters {
    let mut parts = entry.split(',');
    RingParameters {
        inner_radius: parts.next().unwrap().parse().unwrap(),
        outer_radius: parts.next().unwrap().parse().unwrap(),
        color: parse_color(parts.next().unwrap()),
    }
}

fn parse_moon(entry: &str) -> MoonParameters {
    let mut parts = entry.split(',');
    let moon = MoonParameters::new(
        parts.next().unwrap().parse().unwrap(),
        parts.next().unwrap().parse().unwrap(),
        parts.next().unwrap().parse().unwrap(),
    );
    match parts.next() {
        Some(color) => moon.with_color(parse_color(color)),
        None => moon,
    }
}

fn parse_color(s: &str) -> Point3<f32> {
    assert_eq!(s.len(), 6);
    let r = u8::from_str_radix(&s[0..2], 16).unwrap();
    let g = u8::from_str_radix(&s[2..4], 16).unwrap();
    let b = u8::from_str_radix(&s[4..6], 16).unwrap();

    Point3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::body::mid_gray;
    use approx::assert_relative_eq;

    #[test]
    fn test_parses_a_bare_body() {
        let bodies = parse_bodies("mercury 2.0 808080 22 47.8 3.0 0 - -");
        assert_eq!(bodies.len(), 1);

        let mercury = &bodies[0];
        assert_eq!(mercury.name, "mercury");
        assert_relative_eq!(mercury.radius, 2.0);
        assert_relative_eq!(mercury.color, mid_gray(), epsilon = 1e-2);
        assert_relative_eq!(mercury.distance, 22.0);
        assert_relative_eq!(mercury.orbital_speed, 47.8);
        assert_relative_eq!(mercury.spin_speed, 3.0);
        assert_relative_eq!(mercury.axial_tilt_deg, 0.0);
        assert!(mercury.ring.is_none());
        assert!(mercury.moons.is_empty());
    }

    #[test]
    fn test_parses_rings_and_moon_lists() {
        let bodies = parse_bodies(
            "ringed 6.5 f5deb3 115 9.6 22.0 26.7 8.0,12.0,d2b48c 0.9,6,12;0.4,9,-5,ff0000",
        );
        let body = &bodies[0];

        let ring = body.ring.unwrap();
        assert_relative_eq!(ring.inner_radius, 8.0);
        assert_relative_eq!(ring.outer_radius, 12.0);

        assert_eq!(body.moons.len(), 2);
        assert_relative_eq!(body.moons[0].color, mid_gray());
        assert_relative_eq!(body.moons[1].orbital_speed, -5.0);
        assert_relative_eq!(body.moons[1].color, Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let bodies = parse_bodies(
            "# name radius color distance orbital_speed spin_speed tilt ring moons

             a 1.0 ff0000 10 1 1 0 - -
             # interlude
             b 2.0 00ff00 20 2 2 0 - -",
        );
        let names: Vec<_> = bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_color_decodes_hex() {
        assert_relative_eq!(parse_color("000000"), Point3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(parse_color("ffffff"), Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(
            parse_color("2e8b57"),
            Point3::new(46.0, 139.0, 87.0) / 255.0
        );
    }

    #[test]
    #[should_panic]
    fn test_short_line_panics() {
        parse_bodies("stub 1.0 ffffff");
    }
}
