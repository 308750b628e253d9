use uniclass_ucd::Predicate;

/// Associates a predicate's table data with the name of the lookup function
/// the consumer binds to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBinding {
    pub predicate: Predicate,
    /// Upper-case data symbol, e.g. `ID_START`.
    pub name: String,
    /// snake_case lookup function, e.g. `is_id_start`.
    pub function: String,
}

impl TableBinding {
    pub fn for_predicate(predicate: Predicate) -> TableBinding {
        let key = predicate.key();
        TableBinding {
            predicate,
            name: key.to_ascii_uppercase(),
            function: format!("is_{key}"),
        }
    }

    /// camelCase form of the lookup function, e.g. `isIdStart`.
    pub fn camel_function(&self) -> String {
        let mut parts = self.function.split('_');
        let mut out = parts.next().unwrap_or_default().to_string();
        for part in parts {
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uniclass_ucd::{GeneralCategory, Subcategory};

    #[test]
    fn test_core_bindings() {
        let cases = [
            (Predicate::Space, "SPACE", "is_space", "isSpace"),
            (Predicate::IdStart, "ID_START", "is_id_start", "isIdStart"),
            (Predicate::IdContinue, "ID_CONTINUE", "is_id_continue", "isIdContinue"),
            (Predicate::Graphic, "GRAPHIC", "is_graphic", "isGraphic"),
        ];
        for (predicate, name, function, camel) in cases {
            let binding = TableBinding::for_predicate(predicate);
            assert_eq!(binding.name, name);
            assert_eq!(binding.function, function);
            assert_eq!(binding.camel_function(), camel);
        }
    }

    #[test]
    fn test_category_bindings() {
        let binding = TableBinding::for_predicate(Predicate::Subcategory(Subcategory::Zs));
        assert_eq!(binding.name, "GC_ZS");
        assert_eq!(binding.function, "is_gc_zs");
        assert_eq!(binding.camel_function(), "isGcZs");

        let binding = TableBinding::for_predicate(Predicate::Category(GeneralCategory::Letter));
        assert_eq!(binding.name, "GC_L");
        assert_eq!(binding.camel_function(), "isGcL");
    }
}
