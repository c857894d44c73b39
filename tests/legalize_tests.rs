use gate_legalizer::legalize::*;
use gate_legalizer::quantum::*;
use gate_legalizer::simulators::{circuits_equivalent, equivalent_up_to_global_phase, UnitarySimulator};
use gate_legalizer::LegalizeError;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(test)]
mod single_qubit_tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn single_gate_circuit(instruction: Instruction) -> QuantumCircuit {
        let mut circuit = QuantumCircuit::new(1);
        circuit.add_instruction(instruction).unwrap();
        circuit
    }

    #[test]
    fn test_rx_rewrite_examples() {
        // (input θ, output θ, output φ)
        let cases = [
            (PI / 3.0, PI / 3.0, 0.0),
            (-PI / 3.0, PI / 3.0, PI),
            (7.0 * PI / 5.0, 3.0 * PI / 5.0, PI),
            (25.0 * PI, PI, PI),
            (22.0 * PI / 3.0, 2.0 * PI / 3.0, PI),
        ];

        for (input, theta, phi) in cases {
            let result = rewrite_rx_as_r(input).unwrap();
            let ParametrizedGate::R(out_theta, out_phi) = result else {
                panic!("expected an R gate for θ = {}", input);
            };
            assert!((out_theta - theta).abs() < 1e-12, "θ' for {}", input);
            assert_eq!(out_phi, phi, "φ for {}", input);

            let reference = single_gate_circuit(Instruction::rx(0, input));
            let rewritten = single_gate_circuit(Instruction { gate: result, qubits: vec![0] });
            assert!(circuits_equivalent(&reference, &rewritten, 1e-10).unwrap());
        }
    }

    #[test]
    fn test_periodicity_large_multiples() {
        for k in [-40i32, -3, -1, 1, 2, 17, 500] {
            for theta in [0.3, -1.2, 2.9, FRAC_PI_2] {
                let shifted = theta + 2.0 * PI * k as f64;
                for (base, moved) in [
                    (rewrite_rx_as_r(theta).unwrap(), rewrite_rx_as_r(shifted).unwrap()),
                    (rewrite_ry_as_r(theta).unwrap(), rewrite_ry_as_r(shifted).unwrap()),
                ] {
                    assert!(
                        equivalent_up_to_global_phase(&base.matrix(), &moved.matrix(), 1e-9),
                        "θ = {}, k = {}",
                        theta,
                        k
                    );
                }
            }
        }
    }

    #[test]
    fn test_pi_boundary_continuity() {
        // Just below and just above π the outputs flip φ but stay equivalent
        let below = rewrite_rx_as_r(PI - 1e-9).unwrap();
        let above = rewrite_rx_as_r(PI + 1e-9).unwrap();
        assert_eq!(below, ParametrizedGate::R(PI - 1e-9, 0.0));
        let ParametrizedGate::R(theta, phi) = above else { panic!() };
        assert!((theta - (PI - 1e-9)).abs() < 1e-12);
        assert_eq!(phi, PI);
        assert!(equivalent_up_to_global_phase(&below.matrix(), &above.matrix(), 1e-6));
    }
}

#[cfg(test)]
mod two_qubit_tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn as_circuit(sequence: Vec<Instruction>) -> QuantumCircuit {
        QuantumCircuit {
            instructions: sequence,
            qubit_count: 2,
        }
    }

    fn kinds(sequence: &[Instruction]) -> Vec<GateKind> {
        sequence.iter().map(Instruction::kind).collect()
    }

    #[test]
    fn test_rxx_boundary_table() {
        use GateKind::*;
        let cases: Vec<(f64, Vec<GateKind>, f64)> = vec![
            (0.0, vec![RXX], 0.0),
            (FRAC_PI_2, vec![RXX], FRAC_PI_2),
            (-FRAC_PI_2, vec![RZ, RXX, RZ], FRAC_PI_2),
            (PI, vec![RX, RX, RXX], 0.0),
            (-PI, vec![RX, RX, RXX], 0.0),
            (3.0 * PI / 2.0, vec![RX, RX, RXX], FRAC_PI_2),
            (-3.0 * PI / 2.0, vec![RXX], FRAC_PI_2),
            (2.0 * PI, vec![RXX], 0.0),
            (-2.0 * PI, vec![RXX], 0.0),
            (3.0 * PI / 4.0, vec![RX, RX, RZ, RXX, RZ], PI / 4.0),
            (5.0 * PI / 4.0, vec![RX, RX, RXX], PI / 4.0),
            (-3.0 * PI / 4.0, vec![RX, RX, RXX], PI / 4.0),
            (15.0 * PI / 8.0, vec![RZ, RXX, RZ], PI / 8.0),
            (-15.0 * PI / 8.0, vec![RXX], PI / 8.0),
            (33.0 * PI / 16.0, vec![RXX], PI / 16.0),
            (-33.0 * PI / 16.0, vec![RZ, RXX, RZ], PI / 16.0),
        ];

        for (theta, expected_kinds, magnitude) in cases {
            let sequence = wrap_rxx_angle(theta, 0, 1).unwrap();
            assert_eq!(kinds(&sequence), expected_kinds, "θ = {}", theta);

            let rxx = sequence.iter().find(|i| i.kind() == RXX).unwrap();
            assert!((rxx.gate.theta() - magnitude).abs() < 1e-12, "θ = {}", theta);

            let mut reference = QuantumCircuit::new(2);
            reference.add_instruction(Instruction::rxx(0, 1, theta).unwrap()).unwrap();
            assert!(circuits_equivalent(&reference, &as_circuit(sequence), 1e-10).unwrap(), "θ = {}", theta);
        }
    }

    #[test]
    fn test_corrections_use_pi_rotations_only() {
        let mut theta = -25.0;
        while theta < 25.0 {
            for instruction in wrap_rxx_angle(theta, 0, 1).unwrap() {
                match instruction.gate {
                    ParametrizedGate::Rx(angle) | ParametrizedGate::Rz(angle) => {
                        assert_eq!(angle, PI);
                        assert_eq!(instruction.qubits.len(), 1);
                    }
                    ParametrizedGate::Rxx(angle) => assert!((0.0..=FRAC_PI_2).contains(&angle)),
                    other => panic!("unexpected {} for θ = {}", other, theta),
                }
            }
            theta += 0.0917;
        }
    }

    #[test]
    fn test_no_discontinuity_across_boundaries() {
        let boundaries = [
            FRAC_PI_2,
            -FRAC_PI_2,
            PI,
            -PI,
            3.0 * PI / 2.0,
            -3.0 * PI / 2.0,
            2.0 * PI,
            -2.0 * PI,
        ];
        let epsilon = 1e-9;

        for boundary in boundaries {
            let below = as_circuit(wrap_rxx_angle(boundary - epsilon, 0, 1).unwrap());
            let at = as_circuit(wrap_rxx_angle(boundary, 0, 1).unwrap());
            let above = as_circuit(wrap_rxx_angle(boundary + epsilon, 0, 1).unwrap());
            assert!(circuits_equivalent(&below, &at, 1e-6).unwrap(), "below {}", boundary);
            assert!(circuits_equivalent(&at, &above, 1e-6).unwrap(), "above {}", boundary);
        }
    }

    #[test]
    fn test_qubit_order_respected() {
        let sequence = wrap_rxx_angle(-0.4, 3, 1).unwrap();
        assert_eq!(
            sequence,
            vec![
                Instruction::rz(3, PI),
                Instruction::rxx(3, 1, 0.4).unwrap(),
                Instruction::rz(3, PI),
            ]
        );
    }
}

#[cfg(test)]
mod circuit_tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_native(circuit: &QuantumCircuit) {
        let target = NativeGateSet::trapped_ion();
        for (position, instruction) in circuit.iter().enumerate() {
            assert!(target.contains(instruction.kind()), "{} at {}", instruction, position);
            match instruction.gate {
                ParametrizedGate::Rxx(theta) => assert!((0.0..=FRAC_PI_2).contains(&theta)),
                ParametrizedGate::R(theta, _) => assert!((0.0..=PI).contains(&theta)),
                _ => {}
            }
        }
    }

    #[test]
    fn test_qft_circuit_transpilation() {
        for qubits in [1, 5, 10] {
            let qft = qft_circuit(qubits).unwrap();
            let legalized = legalize_circuit(&qft).unwrap();

            assert_native(&legalized);
            assert_eq!(
                legalized.count_ops().get(&GateKind::RXX),
                qft.count_ops().get(&GateKind::RXX),
                "every RXX must survive exactly once"
            );

            if qubits < 6 {
                assert!(circuits_equivalent(&qft, &legalized, 1e-8).unwrap(), "{} qubits", qubits);
            }
        }
    }

    #[test]
    fn test_random_circuits_stay_equivalent() {
        let mut rng = StdRng::seed_from_u64(2024);
        for qubits in 1..=4 {
            let circuit = random_rotation_circuit(qubits, 6, 40.0, &mut rng).unwrap();
            let legalized = legalize_circuit(&circuit).unwrap();
            assert_native(&legalized);
            assert!(circuits_equivalent(&circuit, &legalized, 1e-8).unwrap());
        }
    }

    #[test]
    fn test_legalization_is_idempotent_on_native_circuits() {
        let mut rng = StdRng::seed_from_u64(99);
        let circuit = random_rotation_circuit(3, 4, 10.0, &mut rng).unwrap();
        let once = legalize_circuit(&circuit).unwrap();
        let twice = legalize_circuit(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_run_many_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(5);
        let circuits: Vec<QuantumCircuit> = (0..6)
            .map(|_| random_rotation_circuit(3, 3, 20.0, &mut rng).unwrap())
            .collect();

        let pass = LegalizationPass::default();
        let parallel = pass.run_many(&circuits).unwrap();
        for (circuit, result) in circuits.iter().zip(&parallel) {
            assert_eq!(&pass.transform(circuit).unwrap(), result);
        }
    }

    #[test]
    fn test_invalid_angle_aborts_pass() {
        let mut builder = CircuitBuilder::new(2);
        builder.rx(0, 0.5).unwrap().rxx(0, 1, f64::INFINITY).unwrap();
        let result = legalize_circuit(&builder.build());
        assert!(matches!(
            result,
            Err(LegalizeError::InvalidArgument { gate: GateKind::RXX, .. })
        ));
    }

    #[test]
    fn test_unitary_of_legalized_single_instruction() {
        let simulator = UnitarySimulator::new();
        let instruction = Instruction::rxx(1, 2, 4.0).unwrap();
        let mut circuit = QuantumCircuit::new(3);
        circuit.add_instruction(instruction.clone()).unwrap();

        let legalized = legalize_circuit(&circuit).unwrap();
        let expected = simulator.instruction_unitary(&instruction, 3).unwrap();
        let actual = simulator.unitary(&legalized).unwrap();
        assert!(equivalent_up_to_global_phase(&expected, &actual, 1e-10));
    }
}
