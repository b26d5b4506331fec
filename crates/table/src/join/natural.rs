use super::joined_schema;
use crate::table::Table;
use tracing::debug;

impl Table {
    /// Natural join over every attribute name the two tables share.
    ///
    /// The shared columns appear once, in this table's position; other's copies
    /// are dropped. Tables with no attribute in common yield their cartesian
    /// product.
    pub fn natural_join(&self, other: &Table) -> Table {
        let (cols1, cols2): (Vec<usize>, Vec<usize>) = self
            .attributes()
            .iter()
            .enumerate()
            .filter_map(|(i, a)| other.col(a).map(|j| (i, j)))
            .unzip();

        let mut tuples = Vec::new();
        for t in self.tuples() {
            for u in other.tuples() {
                if t.matches_on(&cols1, u, &cols2) {
                    tuples.push(t.concat(&u.without(&cols2)));
                }
            }
        }

        let schema = joined_schema(self, other, &cols2);
        let result = self.derive(schema, tuples);
        debug!(
            table = %self.name(),
            other = %other.name(),
            shared = cols1.len(),
            rows = result.len(),
            "natural join"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use minirel_core::tuple;

    #[test]
    fn test_natural_join_multiple_shared() {
        let catalog = Catalog::with_defaults();
        let mut movie = catalog
            .create_table(
                "movie",
                "title year genre",
                "String Integer String",
                "title year",
            )
            .unwrap();
        movie.insert(tuple!["Star_Wars", 1977, "SciFi"]).unwrap();
        movie.insert(tuple!["Rocky", 1985, "Drama"]).unwrap();
        movie.insert(tuple!["Rocky", 1976, "Drama"]).unwrap();

        let mut cinema = catalog
            .create_table(
                "cinema",
                "year title screen",
                "Integer String Integer",
                "title year screen",
            )
            .unwrap();
        cinema.insert(tuple![1977, "Star_Wars", 1]).unwrap();
        cinema.insert(tuple![1985, "Rocky", 2]).unwrap();
        cinema.insert(tuple![1999, "Rocky", 3]).unwrap();

        let joined = movie.natural_join(&cinema);
        assert_eq!(joined.attributes(), &["title", "year", "genre", "screen"]);
        assert_eq!(joined.len(), 2);
        assert!(joined.tuples().contains(&tuple!["Rocky", 1985, "Drama", 2]));
        assert_eq!(joined.key(), movie.key());
    }

    #[test]
    fn test_natural_join_without_shared_is_product() {
        let catalog = Catalog::with_defaults();
        let mut a = catalog.create_table("a", "x", "Integer", "x").unwrap();
        a.insert(tuple![1]).unwrap();
        a.insert(tuple![2]).unwrap();
        let mut b = catalog
            .create_table("b", "y z", "String String", "y")
            .unwrap();
        b.insert(tuple!["p", "q"]).unwrap();
        b.insert(tuple!["r", "s"]).unwrap();
        b.insert(tuple!["t", "u"]).unwrap();

        let product = a.natural_join(&b);
        assert_eq!(product.len(), 6);
        assert_eq!(product.attributes(), &["x", "y", "z"]);
        assert!(product.tuples().contains(&tuple![2, "r", "s"]));
    }
}
