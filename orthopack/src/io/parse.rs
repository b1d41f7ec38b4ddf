use crate::io::ext_repr::{ExtContainer, ExtInstance, ExtItem};
use anyhow::{Context, Result, ensure};
use itertools::Itertools;

/// Parses an instance in the plain-text format:
///
/// ```text
/// 3          # number of items
/// 10 10      # container width and height
/// 6 4 0      # width, height and value of every item (value 0 or absent: area)
/// 4 6 0
/// 5 5 30
/// example    # name of the instance
/// ```
///
/// Everything after a `#` is ignored, as are blank lines.
/// If the trailing name is missing, `default_name` is used.
pub fn parse_txt(content: &str, default_name: &str) -> Result<ExtInstance> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, strip_comment(line)))
        .filter(|(_, line)| !line.is_empty());

    let (ln, line) = lines.next().context("missing number of items")?;
    let n_items = line
        .split_whitespace()
        .next()
        .and_then(|t| t.parse::<usize>().ok())
        .with_context(|| format!("line {ln}: invalid number of items: {line:?}"))?;

    let (ln, line) = lines.next().context("missing container dimensions")?;
    let dims = parse_tokens::<u64>(line, ln)?;
    ensure!(
        dims.len() >= 2,
        "line {ln}: expected container width and height, got {line:?}"
    );
    let container = ExtContainer {
        width: dims[0],
        height: dims[1],
    };

    let items = (0..n_items)
        .map(|id| {
            let (ln, line) = lines
                .next()
                .with_context(|| format!("expected {n_items} items, found only {id}"))?;
            let tokens = line.split_whitespace().collect_vec();
            ensure!(
                tokens.len() >= 2,
                "line {ln}: expected item width and height, got {line:?}"
            );
            let value = match tokens.get(2) {
                Some(t) => parse_token::<f64>(t, ln)?,
                None => 0.0,
            };
            Ok(ExtItem {
                id,
                width: parse_token::<u64>(tokens[0], ln)?,
                height: parse_token::<u64>(tokens[1], ln)?,
                value,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let name = lines
        .next()
        .and_then(|(_, line)| line.split_whitespace().next())
        .unwrap_or(default_name)
        .to_string();

    Ok(ExtInstance {
        name,
        container,
        items,
    })
}

fn strip_comment(line: &str) -> &str {
    match line.split_once('#') {
        Some((content, _)) => content.trim(),
        None => line.trim(),
    }
}

fn parse_tokens<T: std::str::FromStr>(line: &str, ln: usize) -> Result<Vec<T>> {
    line.split_whitespace()
        .map(|t| parse_token(t, ln))
        .collect::<Result<Vec<_>>>()
}

fn parse_token<T: std::str::FromStr>(token: &str, ln: usize) -> Result<T> {
    token
        .parse::<T>()
        .ok()
        .with_context(|| format!("line {ln}: invalid number {token:?}"))
}

/// Serializes an instance back into the plain-text format.
pub fn to_txt(instance: &ExtInstance) -> String {
    let header = [
        instance.items.len().to_string(),
        format!("{} {}", instance.container.width, instance.container.height),
    ];
    let items = instance
        .items
        .iter()
        .map(|i| format!("{} {} {}", i.width, i.height, i.value));

    header
        .into_iter()
        .chain(items)
        .chain([instance.name.clone()])
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "
# instance used in the docs
3          # number of items
10 10
6 4 0
4 6 0      # a comment after an item
5 5 30

example
";

    #[test]
    fn parses_example() {
        let inst = parse_txt(EXAMPLE, "fallback").unwrap();
        assert_eq!(inst.name, "example");
        assert_eq!(
            inst.container,
            ExtContainer {
                width: 10,
                height: 10
            }
        );
        assert_eq!(inst.items.len(), 3);
        assert_eq!(inst.items[1].width, 4);
        assert_eq!(inst.items[1].height, 6);
        assert_eq!(inst.items[2].value, 30.0);
        assert!(inst.items.iter().enumerate().all(|(i, item)| item.id == i));
    }

    #[test]
    fn missing_value_and_name() {
        let inst = parse_txt("2\n5 5\n1 2\n3 4", "from_file").unwrap();
        assert_eq!(inst.name, "from_file");
        assert_eq!(inst.items[0].value, 0.0);
        assert_eq!(inst.items[1].value, 0.0);
    }

    #[test]
    fn too_few_items() {
        let err = parse_txt("3\n5 5\n1 2 0\n", "short").unwrap_err();
        assert!(err.to_string().contains("found only 1"));
    }

    #[test]
    fn malformed_numbers() {
        assert!(parse_txt("x\n5 5\n", "bad").is_err());
        assert!(parse_txt("1\n5\n1 1 1\n", "bad").is_err());
        assert!(parse_txt("1\n5 5\n1 a 1\n", "bad").is_err());
        assert!(parse_txt("1\n5 5\n1.5 2 1\n", "bad").is_err());
        assert!(parse_txt("", "empty").is_err());
    }

    #[test]
    fn large_dimensions_are_exact() {
        let inst = parse_txt("1\n10 10\n9007199254740993 1 0\nbig", "").unwrap();
        assert_eq!(inst.items[0].width, 9_007_199_254_740_993);
    }

    #[test]
    fn dimensions_must_be_integers() {
        assert!(parse_txt("1\n10 10\n1e30 1e30 0\nhuge", "").is_err());
        assert!(parse_txt("1\n10 10\n18446744073709551616 1 0\nhuge", "").is_err());
        assert!(parse_txt("1\n10 10\n-1 1 0\nnegative", "").is_err());
    }

    #[test]
    fn text_representation_parses_back() {
        let inst = parse_txt(EXAMPLE, "fallback").unwrap();
        assert_eq!(parse_txt(&to_txt(&inst), "other").unwrap(), inst);
    }
}
