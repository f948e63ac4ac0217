//! Friendly method names and their remote endpoint identifiers.
//!
//! UniSender endpoints are camelCase strings (`getSenderDomainList`); the
//! table below binds snake_case Rust-friendly names to them. Anything not in
//! the table is dispatched verbatim, so callers can reach endpoints this
//! crate does not name.

/// Friendly name → remote endpoint identifier.
///
/// Most entries are plain case renames; the `task_*` entries map to the
/// asynchronous `async/*` endpoint family.
pub const METHOD_ALIASES: &[(&str, &str)] = &[
    ("check_email", "checkEmail"),
    ("check_sms", "checkSms"),
    ("create_campaign", "createCampaign"),
    ("create_email_message", "createEmailMessage"),
    ("create_email_template", "createEmailTemplate"),
    ("create_field", "createField"),
    ("create_list", "createList"),
    ("create_sms_message", "createSmsMessage"),
    ("delete_field", "deleteField"),
    ("delete_list", "deleteList"),
    ("delete_message", "deleteMessage"),
    ("delete_tag", "deleteTag"),
    ("delete_template", "deleteTemplate"),
    ("exclude", "exclude"),
    ("get_actual_message_version", "getActualMessageVersion"),
    ("get_campaign_common_stats", "getCampaignCommonStats"),
    ("get_campaign_status", "getCampaignStatus"),
    ("get_campaigns", "getCampaigns"),
    ("get_checked_email", "getCheckedEmail"),
    ("get_contact", "getContact"),
    ("get_contact_count", "getContactCount"),
    ("get_currency_rates", "getCurrencyRates"),
    ("get_fields", "getFields"),
    ("get_lists", "getLists"),
    ("get_message", "getMessage"),
    ("get_messages", "getMessages"),
    ("get_sender_domain_list", "getSenderDomainList"),
    ("get_tags", "getTags"),
    ("get_task_result", "async/getTaskResult"),
    ("get_template", "getTemplate"),
    ("get_templates", "getTemplates"),
    ("get_total_contacts_count", "getTotalContactsCount"),
    ("get_visited_links", "getVisitedLinks"),
    ("get_web_version", "getWebVersion"),
    ("import_contacts", "importContacts"),
    ("list_messages", "listMessages"),
    ("list_templates", "listTemplates"),
    ("send_email", "sendEmail"),
    ("send_sms", "sendSms"),
    ("send_test_email", "sendTestEmail"),
    ("set_sender_domain", "setSenderDomain"),
    ("subscribe", "subscribe"),
    ("task_export_contacts", "async/exportContacts"),
    (
        "task_get_campaign_delivery_stats",
        "async/getCampaignDeliveryStats",
    ),
    ("unsubscribe", "unsubscribe"),
    ("update_email_template", "updateEmailTemplate"),
    ("update_field", "updateField"),
    ("update_list", "updateList"),
    ("update_opt_in_email", "updateOptInEmail"),
    ("validate_sender", "validateSender"),
];

/// Resolve a friendly method name to its remote endpoint identifier.
///
/// Unknown names pass through unchanged, which keeps the client open-ended:
/// endpoints added by UniSender after this table was written remain callable.
pub fn resolve(name: &str) -> &str {
    METHOD_ALIASES
        .iter()
        .find(|(friendly, _)| *friendly == name)
        .map(|(_, endpoint)| *endpoint)
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve_to_remote_identifiers() {
        assert_eq!(resolve("get_sender_domain_list"), "getSenderDomainList");
        assert_eq!(resolve("send_sms"), "sendSms");
        assert_eq!(resolve("task_export_contacts"), "async/exportContacts");
        assert_eq!(resolve("get_task_result"), "async/getTaskResult");
        assert_eq!(resolve("subscribe"), "subscribe");
    }

    #[test]
    fn unknown_names_pass_through_verbatim() {
        assert_eq!(resolve("someBrandNewMethod"), "someBrandNewMethod");
        assert_eq!(resolve("async/exportContacts"), "async/exportContacts");
    }

    #[test]
    fn alias_table_is_sorted_and_unique() {
        let mut previous: Option<&str> = None;
        for (friendly, _) in METHOD_ALIASES {
            if let Some(prev) = previous {
                assert!(prev < *friendly, "{prev} must sort before {friendly}");
            }
            previous = Some(friendly);
        }
    }
}
