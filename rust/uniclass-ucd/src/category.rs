//! Unicode general categories as fixed enumerations.

use std::fmt;

/// The major general category (the first letter of a `gc` value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeneralCategory {
    Letter,
    Mark,
    Number,
    Punctuation,
    Symbol,
    Separator,
    Other,
}

impl GeneralCategory {
    pub const COUNT: usize = 7;

    pub const ALL: [GeneralCategory; Self::COUNT] = [
        GeneralCategory::Letter,
        GeneralCategory::Mark,
        GeneralCategory::Number,
        GeneralCategory::Punctuation,
        GeneralCategory::Symbol,
        GeneralCategory::Separator,
        GeneralCategory::Other,
    ];

    pub fn from_code(code: char) -> Option<GeneralCategory> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn code(&self) -> char {
        match self {
            GeneralCategory::Letter => 'L',
            GeneralCategory::Mark => 'M',
            GeneralCategory::Number => 'N',
            GeneralCategory::Punctuation => 'P',
            GeneralCategory::Symbol => 'S',
            GeneralCategory::Separator => 'Z',
            GeneralCategory::Other => 'C',
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Letters, marks, numbers, punctuation and symbols are printable.
    pub fn is_graphic(&self) -> bool {
        matches!(
            self,
            GeneralCategory::Letter
                | GeneralCategory::Mark
                | GeneralCategory::Number
                | GeneralCategory::Punctuation
                | GeneralCategory::Symbol
        )
    }
}

impl fmt::Display for GeneralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

macro_rules! subcategories {
    ($($variant:ident => $code:literal, $category:ident;)*) => {
        /// The two-letter general category value (`gc=Lu`, `gc=Zs`, ...).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Subcategory {
            $($variant,)*
        }

        impl Subcategory {
            pub const ALL: [Subcategory; Self::COUNT] = [$(Subcategory::$variant,)*];

            pub fn code(&self) -> &'static str {
                match self {
                    $(Subcategory::$variant => $code,)*
                }
            }

            pub fn category(&self) -> GeneralCategory {
                match self {
                    $(Subcategory::$variant => GeneralCategory::$category,)*
                }
            }
        }
    };
}

subcategories! {
    Lu => "Lu", Letter;
    Ll => "Ll", Letter;
    Lt => "Lt", Letter;
    Lm => "Lm", Letter;
    Lo => "Lo", Letter;
    Mn => "Mn", Mark;
    Mc => "Mc", Mark;
    Me => "Me", Mark;
    Nd => "Nd", Number;
    Nl => "Nl", Number;
    No => "No", Number;
    Pc => "Pc", Punctuation;
    Pd => "Pd", Punctuation;
    Ps => "Ps", Punctuation;
    Pe => "Pe", Punctuation;
    Pi => "Pi", Punctuation;
    Pf => "Pf", Punctuation;
    Po => "Po", Punctuation;
    Sm => "Sm", Symbol;
    Sc => "Sc", Symbol;
    Sk => "Sk", Symbol;
    So => "So", Symbol;
    Zs => "Zs", Separator;
    Zl => "Zl", Separator;
    Zp => "Zp", Separator;
    Cc => "Cc", Other;
    Cf => "Cf", Other;
    Cs => "Cs", Other;
    Co => "Co", Other;
    Cn => "Cn", Other;
}

impl Subcategory {
    pub const COUNT: usize = 30;

    pub fn from_code(code: &str) -> Option<Subcategory> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// A codepoint is graphic if its major category is graphic, or if it is a
    /// space separator.
    pub fn is_graphic(&self) -> bool {
        self.category().is_graphic() || *self == Subcategory::Zs
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
