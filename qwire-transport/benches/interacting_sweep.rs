use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qwire_transport::{
    constants::PhysicalConstants,
    hamiltonian::HamiltonianBuilder,
    interacting::{InteractingSweepBuilder, SweepParameters, SweepSettings},
    material::KnownMaterial,
};
use rand::{thread_rng, Rng};

pub fn bench_diagonalise(c: &mut Criterion) {
    let mut rng = thread_rng();
    let confinement: f64 = rng.gen_range(0.5..2.);
    let interaction: f64 = rng.gen_range(0.0..4.);

    let mut group = c.benchmark_group("diagonalise");
    for sites in [2, 3, 4, 5].into_iter() {
        group.bench_with_input(BenchmarkId::from_parameter(sites), &sites, |b, &sites| {
            b.iter(|| {
                HamiltonianBuilder::new()
                    .with_sites(black_box(sites))
                    .with_confinement(black_box(confinement))
                    .with_interaction(black_box(interaction))
                    .build()
                    .unwrap()
                    .diagonalise(f64::EPSILON, 0)
            })
        });
    }
    group.finish();
}

pub fn bench_sweep(c: &mut Criterion) {
    let material = KnownMaterial::GaAs.wire_material((1., 1.));
    let settings = SweepSettings::default();
    let constants = PhysicalConstants::default();

    let mut group = c.benchmark_group("sweep");
    group.sample_size(10);
    for electrons in [2, 3, 4].into_iter() {
        let parameters = SweepParameters {
            electrons,
            interaction_range: (0., 4.),
            interaction_reversed: false,
            confinement_reversed: false,
            points: 20,
            include_second_excited: true,
        };
        let sweep = InteractingSweepBuilder::new()
            .with_material(&material)
            .with_parameters(&parameters)
            .with_settings(&settings)
            .with_constants(&constants)
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(electrons), &electrons, |b, _| {
            b.iter(|| sweep.run().unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_diagonalise, bench_sweep);
criterion_main!(benches);
