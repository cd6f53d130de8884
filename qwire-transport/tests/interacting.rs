use approx::assert_relative_eq;
use qwire_transport::{
    constants::PhysicalConstants,
    interacting::{
        energy_gap_curve, energy_level_curves, plot_level_conductance, render_sweep_table,
        InteractingSweepBuilder, Metric, SweepParameters, SweepSettings,
    },
    material::{KnownMaterial, WireMaterial},
    report::{Cell, MemorySink},
};

#[test]
fn a_sweep_renders_its_table_and_curves() {
    let material = KnownMaterial::GaAs.wire_material((1., 1.));
    let parameters = SweepParameters {
        electrons: 2,
        interaction_range: (0., 2.),
        interaction_reversed: false,
        confinement_reversed: false,
        points: 5,
        include_second_excited: true,
    };
    let settings = SweepSettings::default();
    let result = InteractingSweepBuilder::new()
        .with_material(&material)
        .with_parameters(&parameters)
        .with_settings(&settings)
        .with_constants(&PhysicalConstants::default())
        .build()
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(result.number_of_points(), 5);
    for (x, expected) in result.x.iter().zip([0., 0.4, 0.8, 1.2, 1.6]) {
        assert_relative_eq!(*x, expected, epsilon = 1e-12);
    }
    assert_eq!(result.rows[0].separation, Metric::NoInteraction);

    let mut sink = MemorySink::new();
    render_sweep_table(&result, &mut sink).unwrap();
    energy_level_curves(&result, &mut sink).unwrap();
    energy_gap_curve(&result, &mut sink).unwrap();
    plot_level_conductance(&result, 2., 0.1, &mut sink).unwrap();

    let (fields, rows) = &sink.tables[0];
    assert_eq!(fields.len(), 9);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0][3], Cell::from("No interaction"));

    assert_eq!(sink.curves_titled("Subbands energy").count(), 3);
    assert_eq!(sink.curves_titled("Conductance Plot").count(), 5);
    let gap = sink
        .curves_titled("Energy gap between ground and 1st excited state")
        .next()
        .unwrap();
    // The first point is pinned at 3t / 2 per electron, above a ground state of t / 2 per electron
    assert_relative_eq!(gap.y[0], 2., epsilon = 1e-10);
}

#[test]
fn a_custom_material_with_a_falling_confinement() {
    let material = WireMaterial::new(12.4, (0.5, 1.5), 0.067, None);
    let parameters = SweepParameters {
        electrons: 1,
        interaction_range: (0., 0.),
        interaction_reversed: false,
        confinement_reversed: true,
        points: 4,
        include_second_excited: false,
    };
    let settings = SweepSettings::default();
    let result = InteractingSweepBuilder::new()
        .with_material(&material)
        .with_parameters(&parameters)
        .with_settings(&settings)
        .with_constants(&PhysicalConstants::default())
        .build()
        .unwrap()
        .run()
        .unwrap();

    let confinements = result.rows.iter().map(|row| row.confinement).collect::<Vec<_>>();
    assert_eq!(confinements, vec![1.25, 1., 0.75, 0.5]);
    for (row, ground) in result.rows.iter().zip(result.ground()) {
        assert_relative_eq!(*ground, 0.5 * row.confinement, epsilon = 1e-10);
    }
    assert!(result.second_excited().is_none());
}
