//! Declaration modifiers.

use std::fmt;

bitflags::bitflags! {
    /// Modifier set of a type or method declaration.
    ///
    /// Iteration (and `Display`) follows flag declaration order, so a
    /// rendered modifier list is stable regardless of how the set was built.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(
        feature = "serde",
        derive(serde::Serialize, serde::Deserialize),
        serde(transparent)
    )]
    pub struct Modifiers: u16 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const ABSTRACT = 1 << 3;
        const STATIC = 1 << 4;
        const FINAL = 1 << 5;
        const SYNCHRONIZED = 1 << 6;
        const NATIVE = 1 << 7;
    }
}

impl Modifiers {
    /// Declarations carrying one of these have no body.
    pub const BODYLESS: Modifiers = Modifiers::ABSTRACT.union(Modifiers::NATIVE);

    /// Keyword spelling of each flag, in declaration order.
    const KEYWORDS: [(Modifiers, &'static str); 8] = [
        (Modifiers::PUBLIC, "public"),
        (Modifiers::PROTECTED, "protected"),
        (Modifiers::PRIVATE, "private"),
        (Modifiers::ABSTRACT, "abstract"),
        (Modifiers::STATIC, "static"),
        (Modifiers::FINAL, "final"),
        (Modifiers::SYNCHRONIZED, "synchronized"),
        (Modifiers::NATIVE, "native"),
    ];

    /// Keywords of the flags present in this set.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        Modifiers::KEYWORDS
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, keyword)| keyword)
    }

    /// Whether the set declares a method that legitimately has no body.
    #[inline]
    pub fn is_bodyless(self) -> bool {
        self.intersects(Modifiers::BODYLESS)
    }
}

/// Space-separated keywords, e.g. `public static final`.
impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, keyword) in self.keywords().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(keyword)?;
        }
        Ok(())
    }
}
