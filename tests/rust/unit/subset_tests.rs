//! Subsets and derived strings

#[cfg(test)]
mod subset_tests {
    use std::borrow::Cow;

    use lazy_static::lazy_static;
    use rowmapper::{record, with_comma, with_mark, Mapper};
    use test_case::test_case;

    record! {
        #[derive(Debug, Default)]
        pub struct Letters {
            pub a: String,
            pub b: String,
            pub c: String,
            pub d: String,
        }
    }

    lazy_static! {
        /// Resolved once, shared by every test thread
        static ref LETTERS: Mapper<Letters> = Mapper::new(&["*"]).expect("letters mapper");
    }

    #[test]
    fn test_subset() {
        assert_eq!(LETTERS.columns(), ["a", "b", "c", "d"]);

        assert_eq!(LETTERS.subset(&["a", "c"]).columns(), ["a", "c"]);
        assert_eq!(LETTERS.subset(&["c", "a"]).columns(), ["a", "c"]);
        assert_eq!(LETTERS.subset(&["b"]).columns(), ["b"]);
        assert!(LETTERS.subset::<&str>(&[]).columns().is_empty());
        assert_eq!(LETTERS.subset(&["*"]).columns(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_subset_wildcard_is_the_parent() {
        let all = LETTERS.subset(&["b", "*"]);
        match all {
            Cow::Borrowed(parent) => assert!(std::ptr::eq(parent, &*LETTERS)),
            Cow::Owned(_) => panic!("wildcard subset should borrow the parent"),
        }
    }

    #[test]
    fn test_subset_of_subset() {
        let ac = LETTERS.subset(&["c", "a"]);
        let c = ac.subset(&["c", "d"]);
        assert_eq!(c.columns(), ["c"]);
        assert_eq!(c.field_indices(), [2]);

        let mut letters = Letters::default();
        {
            let mut addrs = c.addrs(&mut letters).unwrap();
            if let Some(v) = addrs[0].downcast_mut::<String>() {
                *v = "see".to_string();
            }
        }
        assert_eq!(letters.c, "see");
    }

    #[test_case(&["*"], "", "a,b,c,d" ; "all columns")]
    #[test_case(&["*"], "l.", "l.a,l.b,l.c,l.d" ; "all columns prefixed")]
    #[test_case(&["d", "b"], "x.", "x.b,x.d" ; "two columns prefixed")]
    #[test_case(&["c"], "x.", "x.c" ; "single column prefixed")]
    fn test_columns_string_round_trip(columns: &[&str], prefix: &str, expected: &str) {
        let sub = LETTERS.subset(columns);
        let joined = sub.columns_string_prefix(prefix);
        assert_eq!(joined, expected);

        let split: Vec<&str> = joined
            .split(sub.comma)
            .map(|c| c.strip_prefix(prefix).unwrap_or(c))
            .collect();
        assert_eq!(sub.columns(), split.as_slice());
    }

    #[test_case(',', '?', "?,?,?,?" ; "defaults")]
    #[test_case(';', '$', "$;$;$;$" ; "custom")]
    #[test_case(' ', '?', "? ? ? ?" ; "space separator")]
    fn test_marks(comma: char, mark: char, expected: &str) {
        let mapper = (*LETTERS)
            .clone()
            .with_options([with_comma(comma), with_mark(mark)]);
        let marks = mapper.marks();
        assert_eq!(marks, expected);
        assert_eq!(marks.matches(mark).count(), mapper.len());
        assert_eq!(mapper.columns_string().split(comma).count(), mapper.len());
    }
}
