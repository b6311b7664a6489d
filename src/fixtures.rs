#[cfg(test)]
pub mod test {
    use std::collections::HashMap;

    use crate::schema::Schema;
    use crate::types::{Flag, FlagSet};

    /// One field per flag combination, in a fixed declaration order.
    pub fn schema() -> Schema {
        Schema::new()
            .field("simple value", FlagSet::empty())
            .field("flag", [Flag::Flag])
            .field("required", [Flag::Required])
            .field("multi", [Flag::Multi])
            .field("multi flag", [Flag::Multi, Flag::Flag])
            .field("flag required", [Flag::Flag, Flag::Required])
            .field("multi required", [Flag::Multi, Flag::Required])
    }

    pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    pub fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn fixture_schema_declares_seven_fields() {
        assert_eq!(schema().iter().count(), 7);
    }
}
