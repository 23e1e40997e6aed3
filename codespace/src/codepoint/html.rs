/// именованные сущности HTML5, по одной на кодпоинт, отсортированы по кодпоинту
const HTML_ENTITIES: &[(u32, &str)] = include!("./../../data/html_entities.txt");

/// именованная сущность HTML (без ведущего амперсанда), если она есть
pub fn named_entity(code: u32) -> Option<&'static str>
{
    HTML_ENTITIES
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|i| HTML_ENTITIES[i].1)
}
