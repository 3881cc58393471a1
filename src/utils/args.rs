use crate::core::error::PackagerError;

/// Разбивает позиционные аргументы на пары, сохраняя порядок.
/// Нечетное число аргументов — ошибка вызова.
pub fn chunk_pairs(args: &[String]) -> Result<Vec<(String, String)>, PackagerError> {
    if args.len() % 2 != 0 {
        return Err(PackagerError::OddPairList { count: args.len() });
    }
    Ok(args
        .chunks(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect())
}
