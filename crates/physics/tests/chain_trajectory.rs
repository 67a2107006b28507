use physics::{accelerations, ChainConfig, Integrator, ParameterSet, Push, StateVector};

const START: [f64; 10] = [0.01, -0.02, 0.03, 0.04, -0.01, 0.02, 0.0, -0.03, 0.015, 0.005];

fn run(integrator: Integrator, pushes: &[Push]) -> Vec<Vec<f64>> {
    let params = ParameterSet::new(&ChainConfig::default()).unwrap();
    let mut state = StateVector::from_vec(START.to_vec()).unwrap();
    pushes
        .iter()
        .map(|&push| {
            let acc = accelerations(&state, push, &params);
            integrator.advance(&mut state, acc, params.time_step());
            state.to_vec()
        })
        .collect()
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < 1e-12, "component {i}: got {a}, expected {e}");
    }
}

#[test]
fn euler_trajectory_matches_recorded_values() {
    let trajectory = run(Integrator::Euler, &[Push::Right, Push::Right, Push::Left]);
    let expected: [[f64; 10]; 3] = [
        [
            0.009600000000000001, 0.16017147134143772, 0.030799999999999998, -0.22131692333037448,
            -0.009600000000000001, -0.2413169233303745, -0.0006, -0.2913169233303745,
            0.015099999999999999, -0.2563169233303745,
        ],
        [
            0.012803429426828754, 0.3403031902707775, 0.026373661533392507, -0.48233258335974605,
            -0.01442633846660749, -0.5023325833597461, -0.00642633846660749, -0.5523325833597461,
            0.009973661533392509, -0.5173325833597461,
        ],
        [
            0.019609493232244306, 0.15713291854923458, 0.016727009866197587, -0.19991976842089854,
            -0.024472990133802414, -0.21991976842089855, -0.01747299013380241, -0.2699197684208986,
            -0.000372990133802412, -0.23491976842089857,
        ],
    ];
    for (actual, expected) in trajectory.iter().zip(&expected) {
        assert_close(actual, expected);
    }
}

#[test]
fn semi_implicit_trajectory_matches_recorded_values() {
    let trajectory = run(
        Integrator::SemiImplicitEuler,
        &[Push::Right, Push::Right, Push::Left],
    );
    let expected: [[f64; 4]; 3] = [
        [0.013203429426828756, 0.16017147134143772, 0.025573661533392508, -0.22131692333037448],
        [0.0200153414366685, 0.3405956004919872, 0.015886725828808276, -0.4843467852292117],
        [0.023174430763149446, 0.1579544663240473, 0.011771742735684113, -0.2057491546562082],
    ];
    for (actual, expected) in trajectory.iter().zip(&expected) {
        assert_close(&actual[..4], expected);
        // links 2..N are frozen under this scheme
        assert_eq!(&actual[4..], &START[4..]);
    }
}

#[test]
fn every_link_shares_the_angular_acceleration() {
    let trajectory = run(Integrator::Euler, &[Push::Left; 5]);
    let start = StateVector::from_vec(START.to_vec()).unwrap();
    let last = StateVector::from_vec(trajectory.last().unwrap().clone()).unwrap();
    let delta0 = last.theta_dot(0) - start.theta_dot(0);
    for link in 1..last.links() {
        let delta = last.theta_dot(link) - start.theta_dot(link);
        assert!((delta - delta0).abs() < 1e-12, "link {link} drifted from link 1");
    }
}

#[test]
fn pushing_from_rest_accelerates_the_cart() {
    let params = ParameterSet::new(&ChainConfig::default()).unwrap();
    let mut state = StateVector::zeros(params.links());
    let acc = accelerations(&state, Push::Right, &params);
    Integrator::Euler.advance(&mut state, acc, params.time_step());

    assert_eq!(state.x(), 0.0, "position uses the pre-step velocity");
    assert!((state.x_dot() - 0.18181818181818185).abs() < 1e-15);
    for link in 0..state.links() {
        assert!((state.theta_dot(link) + 0.27272727272727276).abs() < 1e-15);
    }
}

#[test]
fn single_link_chain_matches_classic_cart_pole_constants() {
    let config = ChainConfig { link_masses: vec![0.1], ..Default::default() };
    let params = ParameterSet::new(&config).unwrap();
    assert!((params.total_mass() - 1.1).abs() < 1e-15);
    assert!((params.pole_mass_length() - 0.05).abs() < 1e-15);

    let state = StateVector::zeros(1);
    let acc = accelerations(&state, Push::Right, &params);
    // upright pole: x_acc = F / (M + m - 3m/4)
    assert!((acc.x_acc - 10.0 / 1.025).abs() < 1e-12);
}
