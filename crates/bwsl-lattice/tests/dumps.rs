//! Tables dumped through the public configuration path.

use bwsl_lattice::{parse_size, Boundaries, BravaisKind, LatticeConfig, Table};

fn dump(config: &LatticeConfig, table: Table) -> String {
    let lattice = config.build().unwrap();
    let mut buf = Vec::new();
    lattice.write_table(table, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn row_counts_follow_the_table() {
    let closed = LatticeConfig::new(BravaisKind::Square, parse_size("4x3").unwrap());
    let open = closed.clone().with_boundaries(Boundaries::Open);
    for (config, table, rows) in [
        (&closed, Table::Positions, 12),
        (&closed, Table::Vectors, 12),
        (&closed, Table::Momenta, 12),
        (&open, Table::Momenta, 0),
        (&closed, Table::Pairs, 144),
        (&open, Table::Distances, 144),
    ] {
        let text = dump(config, table);
        assert_eq!(text.lines().count(), rows + 1, "{table} {:?}", config.boundaries);
    }
}

#[test]
fn every_row_has_as_many_fields_as_the_header() {
    let config = LatticeConfig::new(BravaisKind::Cubic, vec![2, 2, 3]);
    for table in Table::ALL {
        let text = dump(&config, table);
        let mut lines = text.lines();
        let width = lines.next().unwrap().split(',').count();
        for line in lines {
            assert_eq!(line.split(',').count(), width, "{table}: {line}");
            for field in line.split(',') {
                assert!(field.parse::<f64>().is_ok(), "{table}: {field}");
            }
        }
    }
}

#[test]
fn pairs_table_repeats_vectors_from_origin() {
    let config = LatticeConfig::new(BravaisKind::Triangular, vec![3, 3]);
    let lattice = config.build().unwrap();
    let text = dump(&config, Table::Pairs);
    assert!(text.starts_with("i,a,b,x0,x1,y0,y1,d0,d1\n"));
    for line in text.lines().skip(1) {
        let fields: Vec<f64> = line.split(',').map(|f| f.parse().unwrap()).collect();
        let (a, b) = (fields[1] as usize, fields[2] as usize);
        assert_eq!(fields[0] as usize, lattice.grid().pair_index(a, b));
        assert_eq!(&fields[3..5], lattice.vector(0, a).as_slice());
        assert_eq!(&fields[5..7], lattice.vector(0, b).as_slice());
        assert_eq!(&fields[7..9], lattice.vector(a, b).as_slice());
    }
}
