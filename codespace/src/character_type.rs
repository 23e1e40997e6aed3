use serde::Serialize;

/// класс кодпоинта, для каждого кодпоинта определен ровно один
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharacterType
{
    /// символ с собственным названием в UCD
    NonUnihan,
    /// унифицированный или совместимый иероглиф CJK
    Unihan,
    /// тангутский иероглиф или компонент
    Tangut,
    /// FDD0 ..= FDEF и два последних кодпоинта каждой плоскости
    Noncharacter,
    Surrogate,
    PrivateUse,
    /// не назначен, но находится в пространстве Unicode
    Reserved,
    /// за пределами U+10FFFF
    Invalid,
}

impl CharacterType
{
    /// свойства символа берутся из таблицы иероглифов
    #[inline]
    pub fn is_unihan(&self) -> bool
    {
        matches!(self, Self::Unihan)
    }

    /// название, которое используется при составлении имени неименованного кодпоинта
    pub fn label(&self) -> &'static str
    {
        match self {
            Self::NonUnihan => "non-unihan",
            Self::Unihan => "unihan",
            Self::Tangut => "tangut",
            Self::Noncharacter => "noncharacter",
            Self::Surrogate => "surrogate",
            Self::PrivateUse => "private-use",
            Self::Reserved => "reserved",
            Self::Invalid => "invalid",
        }
    }
}

impl core::fmt::Display for CharacterType
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.write_str(self.label())
    }
}
