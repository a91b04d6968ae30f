// file: src/knowledge/builtin.rs
// description: built-in New York small claims court knowledge base
// reference: NY Unified Court System guides, Real Property Law, CPLR

use super::base::{KnowledgeBase, Section, Subsection};
use crate::config::DEFAULT_CITATION;

fn subsection(key: &str, title: &str, content: &str) -> Subsection {
    Subsection {
        key: key.to_string(),
        title: title.to_string(),
        content: content.to_string(),
    }
}

fn section(
    key: &str,
    title: &str,
    citation: &str,
    content: &str,
    subsections: Vec<Subsection>,
) -> Section {
    Section {
        key: key.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        citation: Some(citation.to_string()),
        subsections,
    }
}

/// The five New York topics the helper answers questions about.
pub fn new_york() -> KnowledgeBase {
    KnowledgeBase {
        sections: vec![
            section(
                "general_procedure",
                "General Procedure",
                "New York State Unified Court System, Small Claims Court Guide",
                "Small Claims Court is a specialized court designed to provide an accessible and \
                 simplified process for resolving minor disputes. Key features include: monetary \
                 limit of $5,000 for Ithaca City Court; informal procedures; optional legal \
                 representation; handles various case types including unpaid debts, property \
                 damage, and breach of contract; lower filing fees ($15-$20); hearings before a \
                 judge; no jury trials unless requested by defendant.",
                vec![
                    subsection(
                        "filing",
                        "Filing a Claim",
                        "To file a claim, complete an application form with accurate names and \
                         addresses of all parties and a description of events. Filing fees in \
                         Ithaca City Court are $15 for claims up to $1,000 and $20 for claims \
                         between $1,000-$5,000. Partnerships can only initiate commercial small \
                         claims. Corporations, LLCs, and associations must file commercial small \
                         claims.",
                    ),
                    subsection(
                        "serving",
                        "Serving the Defendant",
                        "You must serve the defendant with a copy of the summons and complaint. \
                         This can be done through personal service (someone over 18 not involved \
                         in the case delivers documents), certified mail with return receipt, or \
                         substitute service (leaving documents with someone at defendant's \
                         home/business). The person serving must complete an affidavit of \
                         service.",
                    ),
                    subsection(
                        "trial",
                        "Day of Trial",
                        "Arrive early, bring all relevant documents and evidence, organize \
                         materials logically, dress professionally, prepare a clear opening \
                         statement, ensure witnesses are present, and maintain a respectful \
                         demeanor. During the trial, you present your case first, followed by \
                         the defendant. Both sides can question each other and any witnesses. \
                         The court typically mails its decision within 30 days.",
                    ),
                ],
            ),
            section(
                "collections",
                "Collections",
                "New York State Unified Court System, Collecting Judgments",
                "If you win a claim, you become the judgment creditor. Judgments in NY are valid \
                 for 20 years with 9% annual interest. First contact the judgment debtor to \
                 ensure they're aware of the court's decision. If not paid within 30 days, you \
                 may begin collection efforts such as garnishing wages, seizing assets, placing \
                 liens on property, or suspending licenses.",
                vec![
                    subsection(
                        "information_subpoena",
                        "Information Subpoena",
                        "An information subpoena identifies the location of debtor's assets. It \
                         can be sent to the debtor or any entity with information about their \
                         assets. You can obtain one from your local court clerk for $3. It must \
                         be served by registered/certified mail with return receipt.",
                    ),
                    subsection(
                        "enforcement_officers",
                        "Enforcement Officers",
                        "For uncooperative debtors, you may need a sheriff or city marshal to \
                         help collect the debt. Contact an officer in a county where the debtor \
                         has property. Provide information about the debtor's assets and ask \
                         them to obtain an \"execution\" to seize property or money. Their fees \
                         may be added to the judgment amount.",
                    ),
                ],
            ),
            section(
                "landlord_tenant",
                "Landlord/Tenant Law",
                "New York State Real Property Law",
                "In New York, landlord-tenant relationships are governed by Article 7 of the \
                 Consolidated Laws. Leases must identify premises, parties, rent amount, \
                 duration, and rights/obligations. Certain lease provisions are illegal, \
                 including exempting landlords from liability or waiving habitability warranty. \
                 Rent regulation includes rent control and rent stabilization.",
                vec![
                    subsection(
                        "security_deposits",
                        "Security Deposits",
                        "Landlords can require up to one month's rent as security deposit. \
                         Buildings with 6+ units must place deposits in interest-bearing \
                         accounts. Deposits must be returned with itemized deductions within 14 \
                         days of move-out. If not provided on time, landlord must return entire \
                         deposit regardless of damage.",
                    ),
                    subsection(
                        "evictions",
                        "Evictions",
                        "Landlords must give 14-day written notice for non-payment before \
                         eviction proceedings. Only a sheriff, marshal, or constable can execute \
                         court-ordered eviction warrants. Tenants can dismiss non-payment cases \
                         by paying all owed rent until actual eviction. Tenants cannot be \
                         evicted for non-payment of fees like late fees.",
                    ),
                ],
            ),
            section(
                "auto_law",
                "Auto Law",
                "New York State Attorney General's Office, Consumer Guides",
                "New York's lemon laws protect consumers who purchase/lease cars that don't meet \
                 standards. New cars are those purchased/leased less than 2 years from original \
                 delivery with fewer than 18,000 miles. Used car lemon law applies to dealer \
                 sales with purchase price of at least $1,500 and up to 100,000 miles.",
                vec![
                    subsection(
                        "car_accidents",
                        "Car Accidents",
                        "New York is a no-fault insurance state with $50,000 minimum coverage \
                         for medical costs and limited lost income. You can sue for economic \
                         damages beyond no-fault benefits and for non-economic damages only for \
                         \"serious injury\" as defined by Insurance Law Section 5102. Cases are \
                         based on negligence (duty, breach, causation, damages).",
                    ),
                    subsection(
                        "repairs",
                        "Auto Repairs",
                        "Deal only with registered shops (green and white \"Registered State of \
                         New York Motor Vehicle Repair Shop\" sign). Request written estimates \
                         listing parts, costs, and labor charges. Shops cannot perform work \
                         without permission or charge more than estimated without approval. \
                         You're entitled to all replaced parts if requested in writing before \
                         work.",
                    ),
                ],
            ),
            section(
                "statute_limitations",
                "Statute of Limitations",
                "New York CPLR (Civil Practice Law and Rules)",
                "Different types of cases have different time limits for filing. Key time \
                 limits include: contracts (written or oral) - 6 years; property damage - 3 \
                 years; car accidents - 3 years; medical malpractice - 2 years and 6 months; \
                 debt collection - 3 years; fraud - 6 years.",
                vec![],
            ),
        ],
        default_citation: DEFAULT_CITATION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_topic_titles() {
        assert_eq!(
            new_york().list_topic_titles(),
            vec![
                "General Procedure",
                "General Procedure - Filing a Claim",
                "General Procedure - Serving the Defendant",
                "General Procedure - Day of Trial",
                "Collections",
                "Collections - Information Subpoena",
                "Collections - Enforcement Officers",
                "Landlord/Tenant Law",
                "Landlord/Tenant Law - Security Deposits",
                "Landlord/Tenant Law - Evictions",
                "Auto Law",
                "Auto Law - Car Accidents",
                "Auto Law - Auto Repairs",
                "Statute of Limitations",
            ]
        );
    }

    #[test]
    fn test_every_section_has_citation() {
        let kb = new_york();
        for section in &kb.sections {
            assert!(section.citation.is_some(), "{} lacks a citation", section.key);
        }
        let evictions = kb
            .passages()
            .into_iter()
            .find(|p| p.label == "Landlord/Tenant Law - Evictions")
            .unwrap();
        assert_eq!(evictions.citation, "New York State Real Property Law");
    }

    #[test]
    fn test_builtin_is_valid() {
        let kb = new_york();
        assert!(KnowledgeBase::new(kb.sections.clone(), kb.default_citation.clone()).is_ok());
    }
}
