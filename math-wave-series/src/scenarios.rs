//! Preset problems behind the blog figures
//!
//! | name                     | geometry              | modes   |
//! |--------------------------|-----------------------|---------|
//! | `fixed_string`           | [0, π√5], a = 2/3     | 100     |
//! | `rectangular_membrane_1` | [0, π]², c = 1        | 5 × 5   |
//! | `rectangular_membrane_2` | [0, 1] × [0, 2], c = π| 30 × 30 |
//! | `circular_membrane`      | r = 3, a = 0.5        | 40      |

use crate::config::{GeometryConfig, InitialConfig, ProblemConfig, ProfileConfig, TimeConfig};
use crate::evaluator::DomainPolicy;
use std::f64::consts::PI;

/// Names accepted by [`by_name`]
pub const SCENARIO_NAMES: [&str; 4] = [
    "fixed_string",
    "rectangular_membrane_1",
    "rectangular_membrane_2",
    "circular_membrane",
];

/// Look up a preset by name
pub fn by_name(name: &str) -> Option<ProblemConfig> {
    match name {
        "fixed_string" => Some(fixed_string()),
        "rectangular_membrane_1" => Some(rectangular_membrane_1()),
        "rectangular_membrane_2" => Some(rectangular_membrane_2()),
        "circular_membrane" => Some(circular_membrane()),
        _ => None,
    }
}

/// String of length π√5 plucked into one sin³ bump on (1, 3)
pub fn fixed_string() -> ProblemConfig {
    ProblemConfig {
        name: "fixed_string".into(),
        geometry: GeometryConfig::String {
            length: PI * 5.0_f64.sqrt(),
            wave_speed: 2.0 / 3.0,
            quadrature_points: 101,
            evaluation_points: 101,
        },
        modes: 100,
        initial: InitialConfig {
            displacement: ProfileConfig::SineCubedPulse { start: 1.0, end: 3.0 },
            velocity: ProfileConfig::Zero,
        },
        time: TimeConfig {
            t_max: 30.0,
            samples: 31,
        },
        domain_policy: DomainPolicy::Unchecked,
    }
}

/// Square membrane mixing the (1,1) mode at rest with a struck (4,3) mode
///
/// Closed form: `cos(√2 t) sin x sin y + sin(5t) sin 4x sin 3y / 5`.
pub fn rectangular_membrane_1() -> ProblemConfig {
    ProblemConfig {
        name: "rectangular_membrane_1".into(),
        geometry: GeometryConfig::Rectangle {
            width: PI,
            height: PI,
            wave_speed: 1.0,
            quadrature_points: 101,
            evaluation_points: 51,
        },
        modes: 5,
        initial: InitialConfig {
            displacement: ProfileConfig::ProductSine {
                kx: 1.0,
                ky: 1.0,
                amplitude: 1.0,
            },
            velocity: ProfileConfig::ProductSine {
                kx: 4.0,
                ky: 3.0,
                amplitude: 1.0,
            },
        },
        time: TimeConfig {
            t_max: 6.0,
            samples: 100,
        },
        domain_policy: DomainPolicy::Unchecked,
    }
}

/// 1 × 2 membrane released from its fundamental shape, 30 × 30 modes
pub fn rectangular_membrane_2() -> ProblemConfig {
    let (a, b) = (1.0, 2.0);
    ProblemConfig {
        name: "rectangular_membrane_2".into(),
        geometry: GeometryConfig::Rectangle {
            width: a,
            height: b,
            wave_speed: PI,
            quadrature_points: 100,
            evaluation_points: 50,
        },
        modes: 30,
        initial: InitialConfig {
            // cos(π/2 + πx/a) cos(π/2 + πy/b) = sin(πx/a) sin(πy/b)
            displacement: ProfileConfig::ProductSine {
                kx: PI / a,
                ky: PI / b,
                amplitude: 1.0,
            },
            velocity: ProfileConfig::Zero,
        },
        time: TimeConfig {
            t_max: 6.0,
            samples: 100,
        },
        domain_policy: DomainPolicy::Unchecked,
    }
}

/// Drum of radius 3 released from ρ² sin(πρ)³, 40 axisymmetric modes
pub fn circular_membrane() -> ProblemConfig {
    ProblemConfig {
        name: "circular_membrane".into(),
        geometry: GeometryConfig::Disk {
            radius: 3.0,
            wave_speed: 0.5,
            quadrature_points: 51,
            radial_points: 51,
            angular_points: 51,
        },
        modes: 40,
        initial: InitialConfig {
            displacement: ProfileConfig::RadialSineCubed,
            velocity: ProfileConfig::Zero,
        },
        time: TimeConfig {
            t_max: 30.0,
            samples: 100,
        },
        domain_policy: DomainPolicy::Unchecked,
    }
}
