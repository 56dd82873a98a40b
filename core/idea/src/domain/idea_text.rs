//! ユーザーが渡したアイデア本文のドメイン型

/// 空白のみでないことが保証されたアイデア本文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaText(String);

impl IdeaText {
    /// 引数を半角スペース 1 つで結合して前後の空白を落とす。空なら None
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Option<Self> {
        let joined = args
            .iter()
            .map(|a| a.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }
}

impl std::ops::Deref for IdeaText {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for IdeaText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
