// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Mapping of raw platform hits onto [`PatentItem`].
//!
//! Every field is optional and structurally inconsistent across hits, so
//! each extraction walks a key path with [`lookup`] and falls back to `None`
//! at the first missing key or non-object step. Normalization never fails.

use chrono::NaiveDate;
use serde_json::Value;

use crate::types::PatentItem;

/// Candidate publication date formats, tried in order. Each format is paired
/// with the shape it must match so that chrono's variable-width year cannot
/// accept e.g. `01.02.03` as year 1. In a shape `Y` is exactly one ASCII
/// digit, `n` is one or two digits and anything else is literal.
const DATE_FORMATS: &[(&str, &str)] = &[
	("%Y.%m.%d", "YYYY.n.n"),
	("%Y-%m-%d", "YYYY-n-n"),
	("%d.%m.%Y", "n.n.YYYY"),
	("%Y%m%d", "YYYYYYYY"),
	("%d.%m.%y", "n.n.YY"),
];

/// Alternate `biblio.ru` keys some records use instead of `title`/`abstract`.
fn russian_alias(field: &str) -> Option<&'static str> {
	match field {
		"title" => Some("name"),
		"abstract" => Some("annotation"),
		_ => None,
	}
}

/// Walks `path` through nested JSON objects.
///
/// Returns `None` as soon as a key is missing or an intermediate value is
/// not an object.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
	path.iter()
		.try_fold(value, |node, key| node.as_object()?.get(*key))
}

/// Trimmed, non-empty scalar at `path`. Numbers are rendered as strings.
fn text(value: &Value, path: &[&str]) -> Option<String> {
	let raw = match lookup(value, path)? {
		Value::String(s) => s.trim().to_string(),
		Value::Number(n) => n.to_string(),
		_ => return None,
	};
	(!raw.is_empty()).then_some(raw)
}

/// Normalizes one raw hit.
pub fn normalize(hit: &Value) -> PatentItem {
	let country = text(hit, &["common", "publishing_office"]);
	let document_number = text(hit, &["common", "document_number"]);
	let kind = text(hit, &["common", "kind"]);

	let publication_number =
		publication_number(country.as_deref(), document_number.as_deref(), kind.as_deref());

	let publication_date = lookup(hit, &["common", "publication_date"])
		.and_then(Value::as_str)
		.and_then(normalize_date);

	let (title_original, title_ru) = localized(hit, "title");
	let (abstract_original, abstract_ru) = localized(hit, "abstract");

	PatentItem {
		publication_number,
		kind,
		country,
		publication_date,
		application_number: text(hit, &["common", "application", "number"]),
		title_original,
		title_ru,
		abstract_original,
		abstract_ru,
		ipc: ipc_codes(hit),
	}
}

fn publication_number(
	office: Option<&str>,
	document_number: Option<&str>,
	kind: Option<&str>,
) -> Option<String> {
	let document_number = document_number?;
	Some(format!(
		"{}{}{}",
		office.unwrap_or_default(),
		document_number,
		kind.unwrap_or_default()
	))
}

/// Resolves `(original, russian)` variants of a bibliographic field.
///
/// Original prefers English, then Russian, then a flat `biblio.<field>`
/// string. Russian uses the Russian block, then the same flat string. Both
/// fall back last to the Russian alias key (`name`, `annotation`).
fn localized(hit: &Value, field: &str) -> (Option<String>, Option<String>) {
	let en = text(hit, &["biblio", "en", field]);
	let ru = text(hit, &["biblio", "ru", field]);
	let flat = lookup(hit, &["biblio", field])
		.and_then(Value::as_str)
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(str::to_string);
	let alias = russian_alias(field).and_then(|alias| text(hit, &["biblio", "ru", alias]));

	let original = en
		.or_else(|| ru.clone())
		.or_else(|| flat.clone())
		.or_else(|| alias.clone());
	let russian = ru.or(flat).or(alias);
	(original, russian)
}

fn ipc_codes(hit: &Value) -> Option<Vec<String>> {
	let entries = lookup(hit, &["common", "classification", "ipc"]).and_then(Value::as_array)?;
	let codes: Vec<String> = entries.iter().filter_map(ipc_code).collect();
	(!codes.is_empty()).then_some(codes)
}

fn ipc_code(entry: &Value) -> Option<String> {
	if let Some(fullname) = text(entry, &["fullname"]) {
		return Some(fullname);
	}
	let parts: Vec<String> = [text(entry, &["main_group"]), text(entry, &["subgroup"])]
		.into_iter()
		.flatten()
		.collect();
	(!parts.is_empty()).then(|| parts.join(" "))
}

/// Reformats a publication date to `YYYY-MM-DD`.
///
/// The first candidate format that parses wins, even when the input is
/// ambiguous across formats. Returns `None` when none match.
pub fn normalize_date(raw: &str) -> Option<String> {
	let raw = raw.trim();
	DATE_FORMATS
		.iter()
		.filter(|(_, shape)| matches_shape(raw, shape))
		.find_map(|(format, _)| NaiveDate::parse_from_str(raw, format).ok())
		.map(|date| date.format("%Y-%m-%d").to_string())
}

fn matches_shape(input: &str, shape: &str) -> bool {
	let mut rest = input.as_bytes();
	for token in shape.bytes() {
		rest = match token {
			b'n' => {
				let digits = rest.iter().take(2).take_while(|c| c.is_ascii_digit()).count();
				if digits == 0 {
					return false;
				}
				&rest[digits..]
			}
			b'Y' => match rest.split_first() {
				Some((c, tail)) if c.is_ascii_digit() => tail,
				_ => return false,
			},
			literal => match rest.split_first() {
				Some((c, tail)) if *c == literal => tail,
				_ => return false,
			},
		};
	}
	rest.is_empty()
}
