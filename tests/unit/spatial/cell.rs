//! Tests for cell records and lookup sentinels

#[cfg(test)]
mod tests {
    use cellgrid::{Cell, Lookup, Neighbor};

    // Tests a cell converts to its position and an owned triple
    // Verified by swapping x and y in `position`
    #[test]
    fn test_cell_position_and_triple() {
        let value = String::from("b");
        let cell = Cell {
            x: 1,
            y: 2,
            value: &value,
        };

        assert_eq!(cell.position(), (1, 2));
        assert_eq!(cell.to_triple(), (1, 2, "b".to_string()));
    }

    // Tests cell records copy without requiring a copyable value
    // Verified by replacing the manual Copy impl with a derive
    #[test]
    fn test_cell_copies_for_non_copy_values() {
        let value = vec![1, 2, 3];
        let cell = Cell {
            x: 0,
            y: 0,
            value: &value,
        };
        let copy = cell;

        assert_eq!(cell, copy);
    }

    // Tests neighbor accessors for both variants
    // Verified by returning None from `cell` for Inside
    #[test]
    fn test_neighbor_accessors() {
        let value = 'a';
        let inside = Neighbor::Inside(Cell {
            x: 3,
            y: 1,
            value: &value,
        });
        let outside: Neighbor<'_, char> = Neighbor::Outside;

        assert!(!inside.is_outside());
        assert_eq!(inside.cell().map(|cell| cell.position()), Some((3, 1)));
        assert!(outside.is_outside());
        assert!(outside.cell().is_none());
    }

    // Tests both sentinels collapse to no value while a stored value survives
    // Verified by returning the default for Outside
    #[test]
    fn test_lookup_value() {
        let value = 7;

        assert_eq!(Lookup::Present(&value).value(), Some(&7));
        assert!(Lookup::Present(&value).is_present());
        assert_eq!(Lookup::<i32>::Outside.value(), None);
        assert_eq!(Lookup::<i32>::Invalid.value(), None);
        assert_ne!(Lookup::<i32>::Outside, Lookup::Invalid);
    }

    // Tests a stored value equal to a sentinel's meaning stays distinguishable
    // Verified by mapping a stored None to Lookup::Outside
    #[test]
    fn test_lookup_present_none_is_not_a_sentinel() {
        let stored: Option<u8> = None;
        let lookup = Lookup::Present(&stored);

        assert!(lookup.is_present());
        assert_eq!(lookup.value(), Some(&None));
    }
}
