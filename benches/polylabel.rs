use std::f64::consts::PI;

use geo::{polygon, Coord, Geometry, LineString, Polygon};

use criterion::{criterion_group, criterion_main, Criterion};
use geoarrow_polylabel::algorithm::polylabel::Polylabel;
use geoarrow_polylabel::array::polylabel_array;
use geoarrow_polylabel::PolylabelOptions;

fn l_shape() -> Polygon {
    // An L shape
    // https://github.com/georust/geo/blob/7cb7d0ffa6bf1544c5ca9922bd06100c36f815d7/README.md?plain=1#L40
    polygon![
        (x: 0.0, y: 0.0),
        (x: 4.0, y: 0.0),
        (x: 4.0, y: 1.0),
        (x: 1.0, y: 1.0),
        (x: 1.0, y: 4.0),
        (x: 0.0, y: 4.0),
        (x: 0.0, y: 0.0),
    ]
}

/// A star with many concave vertices.
fn star(points: usize) -> Polygon {
    let coords: Vec<Coord> = (0..points * 2)
        .map(|i| {
            let theta = PI * i as f64 / points as f64;
            let r = if i % 2 == 0 { 100.0 } else { 40.0 };
            Coord {
                x: r * theta.cos(),
                y: r * theta.sin(),
            }
        })
        .collect();
    Polygon::new(LineString::new(coords), vec![])
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let l = l_shape();
    let s = star(64);
    let options = PolylabelOptions::new(0.001);

    c.bench_function("polylabel L shape", |b| {
        b.iter(|| {
            let _ = l.polylabel(&options);
        })
    });

    c.bench_function("polylabel star", |b| {
        b.iter(|| {
            let _ = s.polylabel(&options);
        })
    });

    let column: Vec<Option<Geometry>> = vec![Some(l.into()); 1000];
    c.bench_function("polylabel_array 1000 L shapes", |b| {
        b.iter(|| {
            let _ = polylabel_array(&column, &PolylabelOptions::new(0.01));
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
