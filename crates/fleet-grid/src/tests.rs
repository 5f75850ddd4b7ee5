//! Unit tests for fleet-grid.

use std::io::Cursor;

use fleet_core::AddressId;

use crate::{
    AddressIndex, DistanceGrid, DistanceMatrix, GridError, load_addresses_reader,
    load_distances_reader, load_grid_reader,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Three addresses with a lower-triangular table:
/// HUB–A = 3, HUB–B = 5, A–B = 4.
fn small_grid() -> DistanceGrid {
    let index = AddressIndex::from_names(["HUB", "A", "B"]).unwrap();
    let matrix = DistanceMatrix::from_rows(vec![
        vec![Some(0.0)],
        vec![Some(3.0), Some(0.0)],
        vec![Some(5.0), Some(4.0), Some(0.0)],
    ])
    .unwrap();
    DistanceGrid::new(index, matrix).unwrap()
}

// ── AddressIndex ──────────────────────────────────────────────────────────────

mod address_index {
    use super::*;

    #[test]
    fn positions_follow_input_order() {
        let index = AddressIndex::from_names(["HUB", "A", "B"]).unwrap();
        assert_eq!(index.hub(), AddressId(0));
        assert_eq!(index.position_of("HUB").unwrap(), AddressId(0));
        assert_eq!(index.position_of("A").unwrap(), AddressId(1));
        assert_eq!(index.position_of("B").unwrap(), AddressId(2));
        assert_eq!(index.name(AddressId(2)).unwrap(), "B");
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn unknown_address_is_an_error() {
        let index = AddressIndex::from_names(["HUB", "A"]).unwrap();
        assert!(matches!(
            index.position_of("nowhere"),
            Err(GridError::UnknownAddress(_))
        ));
        assert!(!index.contains("nowhere"));
    }

    #[test]
    fn duplicates_are_rejected() {
        assert!(matches!(
            AddressIndex::from_names(["HUB", "A", "A"]),
            Err(GridError::DuplicateAddress(_))
        ));
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(
            AddressIndex::from_names(Vec::<String>::new()),
            Err(GridError::EmptyAddressList)
        ));
    }
}

// ── DistanceMatrix ────────────────────────────────────────────────────────────

mod distance_matrix {
    use super::*;

    #[test]
    fn lookup_tries_both_triangles() {
        let grid = small_grid();
        let (hub, a, b) = (AddressId(0), AddressId(1), AddressId(2));
        // Only the lower triangle is populated; both orderings must work.
        assert_eq!(grid.distance(hub, a).unwrap(), 3.0);
        assert_eq!(grid.distance(a, hub).unwrap(), 3.0);
        assert_eq!(grid.distance(a, b).unwrap(), 4.0);
        assert_eq!(grid.distance(b, a).unwrap(), 4.0);
    }

    #[test]
    fn symmetry_holds_for_all_pairs() {
        let grid = small_grid();
        for i in 0..3u16 {
            for j in 0..3u16 {
                let forward = grid.distance(AddressId(i), AddressId(j)).unwrap();
                let reverse = grid.distance(AddressId(j), AddressId(i)).unwrap();
                assert_eq!(forward, reverse, "asymmetry at ({i}, {j})");
            }
        }
    }

    #[test]
    fn self_distance_is_zero_even_without_diagonal() {
        // No diagonal cells at all.
        let matrix = DistanceMatrix::from_rows(vec![
            vec![],
            vec![Some(2.5)],
        ])
        .unwrap();
        assert_eq!(matrix.distance(AddressId(0), AddressId(0)).unwrap(), 0.0);
        assert_eq!(matrix.distance(AddressId(1), AddressId(1)).unwrap(), 0.0);
    }

    #[test]
    fn unpopulated_pair_is_no_route_data() {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![Some(0.0)],
            vec![],
        ])
        .unwrap();
        assert!(matches!(
            matrix.distance(AddressId(0), AddressId(1)),
            Err(GridError::NoRouteData(_, _))
        ));
    }

    #[test]
    fn out_of_range_and_overlong_rows_are_errors() {
        let matrix = DistanceMatrix::from_rows(vec![vec![Some(0.0)]]).unwrap();
        assert!(matches!(
            matrix.distance(AddressId(0), AddressId(9)),
            Err(GridError::OutOfRange(_, _))
        ));

        assert!(matches!(
            DistanceMatrix::from_rows(vec![vec![Some(0.0), Some(1.0)]]),
            Err(GridError::Shape { .. })
        ));
    }

    #[test]
    fn negative_distance_is_rejected() {
        assert!(DistanceMatrix::from_rows(vec![vec![Some(-1.0)]]).is_err());
    }
}

// ── DistanceGrid ──────────────────────────────────────────────────────────────

mod distance_grid {
    use super::*;

    #[test]
    fn string_lookup_resolves_positions() {
        let grid = small_grid();
        assert_eq!(grid.distance_between("HUB", "B").unwrap(), 5.0);
        assert_eq!(grid.distance_from_hub(AddressId(1)).unwrap(), 3.0);
        assert!(matches!(
            grid.distance_between("HUB", "nowhere"),
            Err(GridError::UnknownAddress(_))
        ));
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let index = AddressIndex::from_names(["HUB", "A"]).unwrap();
        let matrix = DistanceMatrix::from_rows(vec![vec![Some(0.0)]]).unwrap();
        assert!(matches!(
            DistanceGrid::new(index, matrix),
            Err(GridError::TableMismatch { .. })
        ));
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

mod loaders {
    use super::*;

    const ADDRESSES: &str = "HUB\n195 W Oakland Ave\n2530 S 500 E\n";
    const DISTANCES: &str = "0\n7.2,0\n3.8,7.1,0\n";

    #[test]
    fn addresses_from_cursor() {
        let names = load_addresses_reader(Cursor::new(ADDRESSES)).unwrap();
        assert_eq!(names, vec!["HUB", "195 W Oakland Ave", "2530 S 500 E"]);
    }

    #[test]
    fn distances_from_cursor() {
        let rows = load_distances_reader(Cursor::new(DISTANCES)).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec![Some(7.2), Some(0.0)]);
    }

    #[test]
    fn empty_cells_become_none() {
        let rows = load_distances_reader(Cursor::new("0,,\n1.5,0,\n2.5,3.5,0\n")).unwrap();
        assert_eq!(rows[0], vec![Some(0.0), None, None]);
    }

    #[test]
    fn grid_round_trip() {
        let grid = load_grid_reader(Cursor::new(ADDRESSES), Cursor::new(DISTANCES)).unwrap();
        assert_eq!(grid.addresses.len(), 3);
        assert_eq!(
            grid.distance_between("195 W Oakland Ave", "2530 S 500 E").unwrap(),
            7.1
        );
    }

    #[test]
    fn bad_cell_is_a_parse_error() {
        assert!(matches!(
            load_distances_reader(Cursor::new("0\nx,0\n")),
            Err(GridError::Parse(_))
        ));
    }
}
