pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[macro_export]
macro_rules! verify_invariant {
    ($table:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_invariant(result, $table, stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[inline]
pub fn verify_invariant(predicate: bool, table: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invariant_violation(table, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn invariant_violation(table: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvariantViolation {
        table: table.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use crate::ErrorKind;

    fn check_arg(value: u32) -> crate::Result<u32> {
        verify_arg!(value, value < 10);
        Ok(value)
    }

    fn check_table(values: &[u32]) -> crate::Result<()> {
        verify_invariant!("TEST", values.is_sorted());
        Ok(())
    }

    #[test]
    fn test_verify_arg() {
        assert_eq!(check_arg(3).unwrap(), 3);
        let err = check_arg(30).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "value");
                assert_eq!(message, "value < 10");
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_verify_invariant() {
        assert!(check_table(&[1, 2, 2, 5]).is_ok());
        let err = check_table(&[1, 3, 2]).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::InvariantViolation { table, .. } if table == "TEST"
        ));
    }
}
