//! Bundled fintech topic dataset.

use crate::model::topic::{SubItem, Topic};

type SubItemRow = (&'static str, &'static str, bool);
type TopicRow = (&'static str, &'static str, &'static [SubItemRow]);

const TOPICS: &[TopicRow] = &[
    (
        "t1",
        "Digital payments",
        &[
            ("t1c1", "Mobile Wallets", true),
            ("t1c2", "P2P Transfers", true),
            ("t1c3", "Payment Processing", true),
        ],
    ),
    (
        "t2",
        "Blockchain",
        &[
            ("t2c1", "Distributed Ledgers", true),
            ("t2c2", "Consensus Mechanisms", true),
            ("t2c3", "Digital Assets", true),
        ],
    ),
    (
        "t3",
        "Neobanks & challenger banks",
        &[
            ("t3c1", "Digital-Only Banking", true),
            ("t3c2", "Branchless Banking", true),
            ("t3c3", "Mobile Banking", true),
        ],
    ),
    (
        "t4",
        "Lending platforms",
        &[
            ("t4c1", "BNPL Services", true),
            ("t4c2", "P2P Lending", true),
            ("t4c3", "Alternative Credit Scoring", true),
        ],
    ),
    (
        "t5",
        "Personal finance tools",
        &[
            ("t5c1", "Budgeting Apps", true),
            ("t5c2", "Expense Tracking", true),
            ("t5c3", "Financial Planning", true),
        ],
    ),
    (
        "t6",
        "Banking-as-a-Service",
        &[
            ("t6c1", "White-Label Banking", true),
            ("t6c2", "Backend Infrastructure", true),
            ("t6c3", "Financial Platforms", true),
        ],
    ),
    (
        "t7",
        "Open banking / APIs",
        &[
            ("t7c1", "Data Sharing", true),
            ("t7c2", "Financial Ecosystems", true),
            ("t7c3", "Third-Party Integration", true),
        ],
    ),
    (
        "t8",
        "Embedded finance",
        &[
            ("t8c1", "Non-Financial Platforms", true),
            ("t8c2", "Integrated Payment Solutions", true),
            ("t8c3", "Contextual Banking", true),
        ],
    ),
    (
        "t9",
        "Insurtech",
        &[
            ("t9c1", "Digital Insurance", true),
            ("t9c2", "Usage-Based Insurance", true),
            ("t9c3", "Claims Automation", true),
        ],
    ),
    (
        "t10",
        "WealthTech",
        &[
            ("t10c1", "Investment Platforms", true),
            ("t10c2", "Robo-Advisors", true),
            ("t10c3", "Wealth Management", true),
        ],
    ),
    (
        "t11",
        "RegTech",
        &[
            ("t11c1", "Compliance Automation", true),
            ("t11c2", "Risk Management", true),
            ("t11c3", "Regulatory Reporting", true),
        ],
    ),
    (
        "t12",
        "Real-time payments & instant settlement",
        &[
            ("t12c1", "Immediate Transfers", true),
            ("t12c2", "24/7 Payment Systems", true),
            ("t12c3", "Fast Settlement", true),
        ],
    ),
    (
        "t13",
        "Financial inclusion",
        &[
            ("t13c1", "Unbanked Solutions", true),
            ("t13c2", "Accessible Banking", true),
            ("t13c3", "Microfinance", true),
        ],
    ),
    (
        "t14",
        "Digital literacy & financial education",
        &[
            ("t14c1", "Financial Learning", true),
            ("t14c2", "Educational Resources", true),
            ("t14c3", "Financial Empowerment", true),
        ],
    ),
    (
        "t15",
        "Gamification of finance",
        &[
            ("t15c1", "Rewards Systems", true),
            ("t15c2", "Financial Goals", true),
            ("t15c3", "Engagement Mechanics", true),
        ],
    ),
    (
        "t16",
        "AI financial advice",
        &[
            ("t16c1", "Personalized Recommendations", true),
            ("t16c2", "Financial Assistants", true),
            ("t16c3", "Automated Planning", true),
        ],
    ),
    (
        "t17",
        "Cryptocurrency exchanges",
        &[
            ("t17c1", "Trading Platforms", true),
            ("t17c2", "Digital Asset Marketplaces", true),
            ("t17c3", "Crypto Liquidity", true),
        ],
    ),
    (
        "t18",
        "Stablecoins",
        &[
            ("t18c1", "Fiat-Backed Tokens", true),
            ("t18c2", "Crypto-Collateralized Assets", true),
            ("t18c3", "Algorithmic Stablecoins", true),
        ],
    ),
    (
        "t19",
        "DeFi lending/borrowing platforms",
        &[
            ("t19c1", "Decentralized Loans", true),
            ("t19c2", "Yield Farming", true),
            ("t19c3", "Liquidity Provision", true),
        ],
    ),
    (
        "t20",
        "CBDCs",
        &[
            ("t20c1", "Central Bank Digital Currencies", true),
            ("t20c2", "Digital Fiat", true),
            ("t20c3", "National Digital Assets", true),
        ],
    ),
    (
        "t21",
        "Smart contracts",
        &[
            ("t21c1", "Self-Executing Agreements", true),
            ("t21c2", "Programmable Money", true),
            ("t21c3", "Automated Transactions", true),
        ],
    ),
    (
        "t22",
        "Crypto regulation",
        &[
            ("t22c1", "Digital Asset Laws", true),
            ("t22c2", "Regulatory Frameworks", true),
            ("t22c3", "Compliance Standards", true),
        ],
    ),
    (
        "t23",
        "Quantum computing in finance",
        &[
            ("t23c1", "Risk Analysis", true),
            ("t23c2", "Portfolio Optimization", true),
            ("t23c3", "Cryptographic Security", true),
        ],
    ),
    (
        "t24",
        "Financial conduct authorities",
        &[
            ("t24c1", "Regulatory Bodies", true),
            ("t24c2", "SEC/FCA Oversight", true),
            ("t24c3", "Market Supervision", true),
        ],
    ),
    (
        "t25",
        "Sustainable/green finance",
        &[
            ("t25c1", "ESG Investing", true),
            ("t25c2", "Impact Financing", true),
            ("t25c3", "Climate Bonds", true),
        ],
    ),
    (
        "t26",
        "Licensing & cross-border compliance",
        &[
            ("t26c1", "International Regulations", true),
            ("t26c2", "Multi-Jurisdictional Operations", true),
            ("t26c3", "Passporting Rights", true),
        ],
    ),
    (
        "t27",
        "Data privacy laws",
        &[
            ("t27c1", "GDPR Compliance", true),
            ("t27c2", "CCPA Standards", true),
            ("t27c3", "Privacy Frameworks", true),
        ],
    ),
    (
        "t28",
        "Alternative data for credit & risk scoring",
        &[
            ("t28c1", "Non-Traditional Data", true),
            ("t28c2", "Behavioral Metrics", true),
            ("t28c3", "Digital Footprints", true),
        ],
    ),
    (
        "t29",
        "Behavioral economics in finance",
        &[
            ("t29c1", "Decision Making", true),
            ("t29c2", "Consumer Psychology", true),
            ("t29c3", "Bias Mitigation", true),
        ],
    ),
    (
        "t30",
        "APIs and microservices",
        &[
            ("t30c1", "Financial Infrastructure", true),
            ("t30c2", "Service Integration", true),
            ("t30c3", "Modular Architecture", true),
        ],
    ),
    (
        "t31",
        "Cloud computing",
        &[
            ("t31c1", "Financial SaaS", true),
            ("t31c2", "Cloud Infrastructure", true),
            ("t31c3", "Scalable Solutions", true),
        ],
    ),
    (
        "t32",
        "Artificial intelligence & machine learning",
        &[
            ("t32c1", "Fraud Detection", true),
            ("t32c2", "Underwriting", true),
            ("t32c3", "Predictive Analytics", true),
        ],
    ),
    (
        "t33",
        "Cybersecurity",
        &[
            ("t33c1", "Financial Data Protection", true),
            ("t33c2", "Fraud Prevention", true),
            ("t33c3", "Secure Transactions", true),
        ],
    ),
    (
        "t34",
        "Decentralized identity",
        &[
            ("t34c1", "Self-Sovereign Identity", true),
            ("t34c2", "Blockchain Verification", true),
            ("t34c3", "Privacy-Preserving ID", true),
        ],
    ),
    (
        "t35",
        "Digital identity",
        &[
            ("t35c1", "eKYC Solutions", true),
            ("t35c2", "Online Verification", true),
            ("t35c3", "Identity Management", true),
        ],
    ),
    (
        "t36",
        "User onboarding and trust",
        &[
            ("t36c1", "Customer Experience", true),
            ("t36c2", "Trust Mechanisms", true),
            ("t36c3", "Onboarding Flows", true),
        ],
    ),
];

pub(super) fn topics() -> Vec<Topic> {
    TOPICS
        .iter()
        .map(|(id, name, sub_items)| {
            Topic::new(
                *id,
                *name,
                sub_items
                    .iter()
                    .map(|(sub_id, sub_name, selected)| SubItem::new(*sub_id, *sub_name, *selected))
                    .collect(),
            )
        })
        .collect()
}
