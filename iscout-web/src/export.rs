//! CSV export of influencer record lists.
//!
//! RFC 4180 quoting: fields containing a comma, quote, or line break are
//! wrapped in double quotes with embedded quotes doubled.

use iscout_common::db::Influencer;

/// Column order of the exported CSV
pub const CSV_COLUMNS: [&str; 13] = [
    "guid",
    "handle",
    "display_name",
    "niche",
    "followers",
    "country",
    "summary",
    "content_focus",
    "profile_link",
    "hashtags",
    "open_to_collab",
    "status",
    "created_at",
];

/// Serialize records to CSV, header row included
pub fn to_csv(records: &[Influencer]) -> String {
    let mut out = String::new();
    out.push_str(&CSV_COLUMNS.join(","));
    out.push('\n');

    for record in records {
        let fields = [
            record.guid.to_string(),
            record.handle.clone(),
            record.display_name.clone(),
            record.niche.clone(),
            record.followers.to_string(),
            record.country.clone(),
            record.summary.clone(),
            record.content_focus.clone(),
            record.profile_link.clone(),
            record.hashtags.clone(),
            if record.open_to_collab { "Yes" } else { "No" }.to_string(),
            record.status.to_string(),
            record.created_at.to_rfc3339(),
        ];

        let row: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use iscout_common::db::ContactStatus;
    use uuid::Uuid;

    fn sample(handle: &str, summary: &str) -> Influencer {
        Influencer {
            guid: Uuid::new_v4(),
            handle: handle.to_string(),
            display_name: "Anna Keller".to_string(),
            niche: "fitness".to_string(),
            followers: 24_000,
            country: "Germany".to_string(),
            summary: summary.to_string(),
            content_focus: "Home workouts".to_string(),
            profile_link: format!("https://instagram.com/{}", handle),
            hashtags: "homeworkout, fitberlin".to_string(),
            open_to_collab: true,
            status: ContactStatus::New,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn header_matches_column_order() {
        let csv = to_csv(&[]);
        assert_eq!(csv, format!("{}\n", CSV_COLUMNS.join(",")));
    }

    #[test]
    fn one_line_per_record() {
        let records = vec![sample("fit_anna", "Coach"), sample("run_jo", "Runner")];
        let csv = to_csv(&records);
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.contains("fit_anna"));
        assert!(csv.contains("run_jo"));
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let records = vec![sample("fit_anna", "Strength coach, Berlin")];
        let csv = to_csv(&records);
        assert!(csv.contains("\"Strength coach, Berlin\""));
        // the hashtags column contains a comma and must be quoted too
        assert!(csv.contains("\"homeworkout, fitberlin\""));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("line\nbreak"), "\"line\nbreak\"");
    }
}
