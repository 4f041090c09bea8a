//! The markup schedule document: a `<weeklyRoutine>` root with `<day>` and
//! `<task>` elements.
//!
//! Writing produces a proper, fully escaped document. Reading is a tolerant
//! substring scan for tag pairs, not a general markup parser — this is a
//! deliberate, contained decision (see DESIGN.md): missing child elements
//! take defaults, and malformed nesting truncates the scan at the failure
//! point instead of raising an error. Keep that leniency here; the text
//! format codec stays strict.

use crate::core::{DaySchedule, Task, WeekSchedule};

pub fn to_markup(week: &WeekSchedule) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<weeklyRoutine>\n");
    for day in week.days() {
        out.push_str(&format!("  <day name=\"{}\">\n", escape(day.name())));
        for task in day.tasks() {
            out.push_str(&format!("    <task completed=\"{}\">\n", task.completed));
            out.push_str(&format!("      <time>{}</time>\n", escape(&task.start)));
            out.push_str(&format!("      <endTime>{}</endTime>\n", escape(&task.end)));
            out.push_str(&format!("      <name>{}</name>\n", escape(&task.name)));
            out.push_str(&format!(
                "      <priority>{}</priority>\n",
                escape(&task.priority)
            ));
            out.push_str(&format!(
                "      <category>{}</category>\n",
                escape(&task.category)
            ));
            out.push_str("    </task>\n");
        }
        out.push_str("  </day>\n");
    }
    out.push_str("</weeklyRoutine>\n");
    out
}

/// Scan out whatever days the document holds, in document order.
pub fn from_markup(xml: &str) -> Vec<DaySchedule> {
    let mut out = Vec::new();
    let mut pos = 0;
    loop {
        let Some(day_start) = find_from(xml, "<day", pos) else {
            break;
        };
        let Some(name_attr) = find_from(xml, "name=\"", day_start) else {
            break;
        };
        let Some(name_end) = find_from(xml, "\"", name_attr + 6) else {
            break;
        };
        let day_name = &xml[name_attr + 6..name_end];
        let Some(open_end) = find_from(xml, ">", name_end) else {
            break;
        };
        let Some(day_end) = find_from(xml, "</day>", open_end) else {
            break;
        };
        let body = &xml[open_end + 1..day_end];
        let mut schedule = DaySchedule::new(day_name);
        scan_tasks(body, &mut schedule);
        out.push(schedule);
        pos = day_end + 6;
    }
    out
}

fn scan_tasks(body: &str, schedule: &mut DaySchedule) {
    let mut tpos = 0;
    loop {
        let Some(ts) = find_from(body, "<task", tpos) else {
            break;
        };
        let Some(te) = find_from(body, "</task>", ts) else {
            break;
        };
        let task_tag = &body[ts..te];
        let completed = task_tag.contains("completed=\"true\"");
        // An opening tag without '>' leaves the tag text in the scan, same
        // as the rest of the leniency here.
        let inner_start = task_tag.find('>').map(|i| i + 1).unwrap_or(0);
        let txml = &body[ts + inner_start..te];
        let time = extract_tag(txml, "time");
        let name = extract_tag(txml, "name");
        if let (Some(time), Some(name)) = (time, name) {
            let end = extract_tag(txml, "endTime").unwrap_or_else(|| time.clone());
            let priority = extract_tag(txml, "priority").unwrap_or_else(|| "Low".to_string());
            let category = extract_tag(txml, "category").unwrap_or_else(|| "Other".to_string());
            let mut task = Task::new(name, time, end, priority, category);
            task.completed = completed;
            schedule.add_task(task);
        }
        tpos = te + 7;
    }
}

fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack.get(from..)?.find(needle).map(|i| from + i)
}

fn extract_tag(xml: &str, tag: &str) -> Option<String> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = xml.find(&open)? + open.len();
    let end = find_from(xml, &close, start)?;
    Some(unescape(&xml[start..end]))
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
