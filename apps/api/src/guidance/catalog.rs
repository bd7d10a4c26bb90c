//! Static career catalog: three canonical career paths per domain, salaries in
//! USD. Rendering to `CareerPath` converts salaries with the currency module.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::guidance::currency::usd_range_to_inr;
use crate::guidance::domains::DomainId;
use crate::models::career::CareerPath;

#[derive(Debug)]
pub struct PathTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub required_skills: &'static [&'static str],
    pub salary_usd: (u64, u64),
    pub growth_prospect: &'static str,
}

impl PathTemplate {
    pub fn render(&self) -> CareerPath {
        CareerPath {
            title: self.title.to_string(),
            description: self.description.to_string(),
            required_skills: self.required_skills.iter().map(|s| s.to_string()).collect(),
            salary_range: usd_range_to_inr(self.salary_usd.0, self.salary_usd.1)
                .unwrap_or_else(|| format!("${} - ${}", self.salary_usd.0, self.salary_usd.1)),
            growth_prospect: self.growth_prospect.to_string(),
        }
    }
}

const fn path(
    title: &'static str,
    description: &'static str,
    required_skills: &'static [&'static str],
    salary_usd: (u64, u64),
    growth_prospect: &'static str,
) -> PathTemplate {
    PathTemplate {
        title,
        description,
        required_skills,
        salary_usd,
        growth_prospect,
    }
}

/// Looks up the three paths for `domain`.
pub fn paths_for(domain: DomainId) -> Option<&'static [PathTemplate; 3]> {
    CATALOG
        .iter()
        .find(|(d, _)| *d == domain)
        .map(|(_, paths)| paths)
}

/// Domains that have catalog entries, in table order.
#[cfg(test)]
fn catalogued_domains() -> impl Iterator<Item = DomainId> {
    CATALOG.iter().map(|(d, _)| *d)
}

/// Paths of a uniformly random catalog entry.
pub fn random_paths<R: Rng + ?Sized>(rng: &mut R) -> &'static [PathTemplate; 3] {
    CATALOG.choose(rng).map_or(&CATALOG[0].1, |(_, paths)| paths)
}

static CATALOG: [(DomainId, [PathTemplate; 3]); 32] = [
    (DomainId::SoftwareDevelopment, [
        path("Full Stack Developer", "Develop complete web applications from frontend to backend",
            &["JavaScript", "React", "Node.js", "Databases", "Git"], (70_000, 130_000),
            "High - Strong demand for versatile developers"),
        path("Software Engineer", "Design and develop software systems and applications",
            &["Programming Languages", "Data Structures", "System Design", "Testing"], (80_000, 150_000),
            "High - Technology sector continues to grow rapidly"),
        path("Backend Developer", "Build the APIs, services and data layers behind applications",
            &["Python", "REST APIs", "SQL", "Caching", "Cloud Services"], (75_000, 140_000),
            "High - Every product needs reliable backend systems"),
    ]),
    (DomainId::WebDevelopment, [
        path("Frontend Developer", "Build responsive, accessible user interfaces for the web",
            &["HTML", "CSS", "JavaScript", "React", "Accessibility"], (60_000, 120_000),
            "High - Web remains the primary product surface"),
        path("Full Stack Web Developer", "Own features end to end across browser and server",
            &["JavaScript", "Node.js", "React", "Databases", "Deployment"], (70_000, 130_000),
            "High - Startups and agencies value end-to-end builders"),
        path("Web Performance Engineer", "Make web applications fast, lean and reliable",
            &["JavaScript", "Browser Internals", "CDNs", "Profiling", "Core Web Vitals"], (85_000, 150_000),
            "Medium - Specialist role with growing importance"),
    ]),
    (DomainId::MobileDevelopment, [
        path("Android Developer", "Build native Android applications",
            &["Kotlin", "Android SDK", "Jetpack Compose", "REST APIs", "Git"], (70_000, 130_000),
            "High - Android dominates global mobile usage"),
        path("iOS Developer", "Build native applications for iPhone and iPad",
            &["Swift", "SwiftUI", "UIKit", "Xcode", "App Store Deployment"], (75_000, 140_000),
            "High - Premium mobile market keeps growing"),
        path("Cross-Platform Mobile Developer", "Ship one codebase to Android and iOS",
            &["Flutter", "Dart", "React Native", "State Management", "Mobile UX"], (65_000, 125_000),
            "High - Companies want faster multi-platform delivery"),
    ]),
    (DomainId::DataScience, [
        path("Data Scientist", "Extract insights from data to drive business decisions",
            &["Python", "Statistics", "Machine Learning", "SQL", "Data Visualization"], (90_000, 160_000),
            "Very High - Data-driven decision making is crucial"),
        path("Data Analyst", "Analyze data to identify trends and create reports",
            &["SQL", "Excel", "Tableau/PowerBI", "Statistics", "Business Intelligence"], (60_000, 100_000),
            "High - Every company needs data insights"),
        path("Business Intelligence Analyst", "Turn company data into dashboards and decisions",
            &["SQL", "Power BI", "Data Modeling", "Stakeholder Communication", "Excel"], (65_000, 110_000),
            "High - Self-service analytics keeps expanding"),
    ]),
    (DomainId::MachineLearningAi, [
        path("ML Engineer", "Deploy and maintain machine learning models in production",
            &["Python", "TensorFlow/PyTorch", "MLOps", "Cloud Platforms", "Docker"], (100_000, 180_000),
            "Very High - AI/ML adoption is accelerating"),
        path("AI Research Scientist", "Develop new models and learning techniques",
            &["Deep Learning", "Linear Algebra", "PyTorch", "Research Writing", "Experimentation"], (120_000, 220_000),
            "Very High - Frontier AI work is heavily funded"),
        path("NLP Engineer", "Build language understanding and generation systems",
            &["Python", "Transformers", "LLMs", "Text Processing", "Evaluation"], (105_000, 190_000),
            "Very High - Language models are reshaping software"),
    ]),
    (DomainId::DataEngineering, [
        path("Data Engineer", "Build pipelines that move and shape data at scale",
            &["Python", "SQL", "Apache Spark", "Airflow", "Data Warehousing"], (90_000, 160_000),
            "Very High - Every analytics team depends on data engineers"),
        path("Analytics Engineer", "Model raw data into trusted, documented datasets",
            &["SQL", "dbt", "Data Modeling", "Git", "BI Tools"], (85_000, 145_000),
            "High - Modern data stack adoption is spreading"),
        path("Big Data Engineer", "Operate distributed storage and processing systems",
            &["Hadoop", "Kafka", "Spark", "Scala", "Cloud Storage"], (95_000, 170_000),
            "High - Data volumes keep growing"),
    ]),
    (DomainId::DevopsCloud, [
        path("DevOps Engineer", "Bridge development and operations to streamline software delivery",
            &["Docker", "Kubernetes", "AWS/Cloud", "CI/CD", "Monitoring"], (85_000, 140_000),
            "Very High - Essential for modern software delivery"),
        path("Cloud Architect", "Design secure, scalable cloud infrastructure",
            &["AWS", "Azure", "Networking", "Infrastructure as Code", "Security"], (110_000, 190_000),
            "Very High - Cloud migration continues across industries"),
        path("Site Reliability Engineer", "Keep production systems fast and available",
            &["Linux", "Kubernetes", "Observability", "Incident Response", "Automation"], (100_000, 175_000),
            "High - Reliability is a core business metric"),
    ]),
    (DomainId::Cybersecurity, [
        path("Security Analyst", "Monitor, detect and respond to security threats",
            &["SIEM", "Networking", "Incident Response", "Threat Intelligence", "Linux"], (70_000, 120_000),
            "Very High - Security talent shortage persists"),
        path("Penetration Tester", "Find vulnerabilities before attackers do",
            &["Ethical Hacking", "Burp Suite", "Metasploit", "Scripting", "OWASP"], (80_000, 140_000),
            "High - Regular testing is now a compliance requirement"),
        path("Security Engineer", "Build security controls into systems and pipelines",
            &["Cloud Security", "Cryptography", "IAM", "Secure Coding", "Automation"], (95_000, 165_000),
            "Very High - Every engineering org needs security built in"),
    ]),
    (DomainId::DesignUx, [
        path("UX Designer", "Research users and design intuitive product experiences",
            &["User Research", "Wireframing", "Figma", "Usability Testing", "Information Architecture"], (65_000, 120_000),
            "High - Good UX is a competitive advantage"),
        path("UI Designer", "Craft visual interfaces and design systems",
            &["Figma", "Visual Design", "Typography", "Design Systems", "Prototyping"], (60_000, 110_000),
            "High - Digital products need polished interfaces"),
        path("Product Designer", "Own design from problem framing to shipped feature",
            &["UX Research", "Interaction Design", "Figma", "Prototyping", "Collaboration"], (80_000, 150_000),
            "Very High - Product-led companies hire designers early"),
    ]),
    (DomainId::GraphicDesign, [
        path("Graphic Designer", "Create visual content for print and digital media",
            &["Adobe Illustrator", "Photoshop", "Typography", "Layout", "Branding"], (45_000, 85_000),
            "Medium - Steady demand across agencies and brands"),
        path("Brand Designer", "Define and maintain visual brand identities",
            &["Branding", "Logo Design", "Illustrator", "Color Theory", "Brand Guidelines"], (55_000, 100_000),
            "Medium - Brands keep investing in identity"),
        path("Visual Designer", "Design marketing and product visuals",
            &["Visual Design", "Figma", "Illustration", "Motion Basics", "Art Direction"], (55_000, 105_000),
            "High - Digital marketing needs constant fresh visuals"),
    ]),
    (DomainId::GameDevelopment, [
        path("Game Developer", "Program gameplay systems and mechanics",
            &["C#", "Unity", "Game Physics", "Math", "Version Control"], (60_000, 115_000),
            "High - Gaming industry keeps expanding"),
        path("Game Designer", "Design rules, levels and player experiences",
            &["Level Design", "Prototyping", "Game Theory", "Playtesting", "Storytelling"], (55_000, 100_000),
            "Medium - Competitive but rewarding field"),
        path("Technical Artist", "Bridge art and engineering in game production",
            &["Shaders", "Blender", "Unreal Engine", "Scripting", "Optimization"], (65_000, 120_000),
            "High - Studios need artists who can code"),
    ]),
    (DomainId::BlockchainWeb3, [
        path("Blockchain Developer", "Build decentralized applications and protocols",
            &["Solidity", "Ethereum", "Smart Contracts", "Web3.js", "Cryptography"], (90_000, 170_000),
            "High - Decentralized finance continues to mature"),
        path("Smart Contract Auditor", "Review smart contracts for security flaws",
            &["Solidity", "Security Analysis", "Formal Verification", "EVM", "Testing"], (100_000, 190_000),
            "High - Audits are mandatory before launches"),
        path("Web3 Frontend Developer", "Connect user interfaces to blockchain networks",
            &["React", "ethers.js", "Wallet Integration", "TypeScript", "IPFS"], (80_000, 150_000),
            "Medium - Grows with dApp adoption"),
    ]),
    (DomainId::QualityAssurance, [
        path("QA Automation Engineer", "Automate tests that protect product quality",
            &["Selenium", "Cypress", "Test Frameworks", "CI/CD", "Scripting"], (65_000, 120_000),
            "High - Automation replaces manual regression"),
        path("Manual QA Tester", "Explore products to find defects before users do",
            &["Test Cases", "Bug Tracking", "Exploratory Testing", "Attention to Detail", "Jira"], (45_000, 80_000),
            "Medium - Still essential for user-facing quality"),
        path("Software Development Engineer in Test", "Build test infrastructure and tooling",
            &["Programming", "Test Architecture", "Performance Testing", "APIs", "Docker"], (85_000, 150_000),
            "High - Quality engineering is moving left"),
    ]),
    (DomainId::EmbeddedIot, [
        path("Embedded Software Engineer", "Write software for microcontrollers and devices",
            &["C", "C++", "RTOS", "Microcontrollers", "Debugging"], (75_000, 135_000),
            "High - Connected devices are everywhere"),
        path("IoT Engineer", "Connect devices, gateways and cloud platforms",
            &["MQTT", "Embedded C", "Cloud IoT", "Networking", "Sensors"], (70_000, 130_000),
            "High - Industrial IoT adoption is rising"),
        path("Firmware Engineer", "Develop low-level code close to hardware",
            &["C", "Assembly", "Hardware Interfaces", "Bootloaders", "Oscilloscopes"], (80_000, 140_000),
            "Medium - Steady demand in hardware companies"),
    ]),
    (DomainId::NetworkingSystems, [
        path("Network Engineer", "Design and maintain enterprise networks",
            &["TCP/IP", "Routing", "Switching", "Firewalls", "Cisco"], (65_000, 115_000),
            "Medium - Networks underpin all IT"),
        path("Systems Administrator", "Run servers, users and core IT services",
            &["Linux", "Windows Server", "Active Directory", "Scripting", "Backups"], (55_000, 95_000),
            "Medium - Evolving toward cloud operations"),
        path("Network Security Engineer", "Protect networks from intrusion",
            &["Firewalls", "VPN", "IDS/IPS", "Network Design", "Security Policies"], (80_000, 140_000),
            "High - Security budgets keep growing"),
    ]),
    (DomainId::DatabaseAdministration, [
        path("Database Administrator", "Keep databases available, fast and backed up",
            &["SQL", "PostgreSQL", "Backup & Recovery", "Performance Tuning", "Security"], (70_000, 125_000),
            "Medium - Shifting toward managed cloud databases"),
        path("Database Developer", "Design schemas and write efficient queries",
            &["SQL", "Stored Procedures", "Data Modeling", "Indexing", "ETL"], (70_000, 120_000),
            "Medium - Core skill for data-heavy products"),
        path("Database Reliability Engineer", "Automate and scale database operations",
            &["PostgreSQL", "MySQL", "Automation", "Replication", "Cloud Databases"], (95_000, 160_000),
            "High - Data platforms need reliability specialists"),
    ]),
    (DomainId::DigitalMarketing, [
        path("Digital Marketing Specialist", "Plan and run online marketing campaigns",
            &["SEO", "Social Media", "Google Ads", "Analytics", "Content Strategy"], (45_000, 85_000),
            "High - Marketing budgets keep moving online"),
        path("SEO Specialist", "Grow organic search traffic",
            &["Keyword Research", "Technical SEO", "Content Optimization", "Google Search Console", "Link Building"], (45_000, 90_000),
            "Medium - Search remains a top acquisition channel"),
        path("Growth Marketer", "Run experiments to grow users and revenue",
            &["A/B Testing", "Analytics", "Funnels", "Paid Acquisition", "Copywriting"], (65_000, 130_000),
            "High - Startups prize data-driven marketers"),
    ]),
    (DomainId::ContentWriting, [
        path("Content Writer", "Write articles, blogs and web copy",
            &["Writing", "SEO Basics", "Research", "Editing", "CMS"], (40_000, 75_000),
            "Medium - Content marketing remains strong"),
        path("Technical Writer", "Document products, APIs and processes",
            &["Technical Writing", "Documentation Tools", "APIs", "Markdown", "Information Design"], (60_000, 110_000),
            "High - Developer documentation is in demand"),
        path("Copywriter", "Write persuasive copy for brands and campaigns",
            &["Copywriting", "Brand Voice", "Storytelling", "Marketing", "Editing"], (45_000, 95_000),
            "Medium - Every campaign needs strong copy"),
    ]),
    (DomainId::ProductManagement, [
        path("Product Manager", "Decide what to build and why",
            &["Product Strategy", "User Research", "Roadmapping", "Analytics", "Communication"], (90_000, 160_000),
            "Very High - Product roles are central to tech companies"),
        path("Associate Product Manager", "Support product decisions and delivery",
            &["User Stories", "Prioritization", "Data Analysis", "Stakeholder Management", "Agile"], (65_000, 110_000),
            "High - Common entry point into product careers"),
        path("Technical Product Manager", "Lead platform and developer-facing products",
            &["System Design Basics", "APIs", "Roadmapping", "Engineering Collaboration", "Metrics"], (100_000, 175_000),
            "Very High - Platform products need technical PMs"),
    ]),
    (DomainId::ProjectManagement, [
        path("Project Manager", "Plan and deliver projects on time and on budget",
            &["Planning", "Risk Management", "Stakeholder Management", "Budgeting", "Communication"], (70_000, 120_000),
            "High - Every industry runs projects"),
        path("Scrum Master", "Coach teams in agile delivery",
            &["Scrum", "Agile", "Facilitation", "Jira", "Coaching"], (75_000, 125_000),
            "Medium - Agile adoption is widespread"),
        path("Program Manager", "Coordinate multiple related projects toward one goal",
            &["Program Planning", "Leadership", "Dependency Management", "Reporting", "Strategy"], (95_000, 160_000),
            "High - Large initiatives need program leadership"),
    ]),
    (DomainId::BusinessAnalysis, [
        path("Business Analyst", "Translate business needs into requirements",
            &["Requirements Gathering", "Process Modeling", "SQL", "Documentation", "Communication"], (60_000, 105_000),
            "High - Bridges business and technology teams"),
        path("Management Consultant", "Advise organizations on strategy and operations",
            &["Problem Solving", "Financial Analysis", "Presentations", "Strategy", "Research"], (80_000, 160_000),
            "High - Consulting demand tracks business change"),
        path("Process Improvement Analyst", "Make operations faster and cheaper",
            &["Lean", "Six Sigma", "Process Mapping", "Data Analysis", "Change Management"], (60_000, 100_000),
            "Medium - Efficiency is always a priority"),
    ]),
    (DomainId::FinanceAccounting, [
        path("Financial Analyst", "Analyze financial data to guide decisions",
            &["Financial Modeling", "Excel", "Accounting Basics", "Forecasting", "Reporting"], (60_000, 110_000),
            "High - Every company needs financial insight"),
        path("Accountant", "Maintain accurate financial records and statements",
            &["Bookkeeping", "Tax", "Accounting Software", "Auditing", "Compliance"], (50_000, 90_000),
            "Medium - Stable demand across industries"),
        path("Investment Analyst", "Evaluate investment opportunities",
            &["Valuation", "Financial Modeling", "Market Research", "Excel", "Economics"], (75_000, 150_000),
            "High - Capital markets need sharp analysts"),
    ]),
    (DomainId::SalesBusinessDevelopment, [
        path("Sales Executive", "Win new customers and close deals",
            &["Negotiation", "CRM", "Prospecting", "Communication", "Product Knowledge"], (50_000, 110_000),
            "High - Revenue roles are always needed"),
        path("Business Development Manager", "Find partnerships and new markets",
            &["Lead Generation", "Partnerships", "Market Research", "Presentations", "Strategy"], (70_000, 140_000),
            "High - Growth depends on new opportunities"),
        path("Account Manager", "Grow and retain existing customer relationships",
            &["Relationship Management", "Upselling", "CRM", "Communication", "Problem Solving"], (55_000, 100_000),
            "Medium - Retention is a key revenue driver"),
    ]),
    (DomainId::HumanResources, [
        path("HR Generalist", "Handle hiring, onboarding and employee relations",
            &["Recruitment", "Employee Relations", "HR Policies", "Payroll Basics", "Communication"], (50_000, 85_000),
            "Medium - Every growing company needs HR"),
        path("Talent Acquisition Specialist", "Find and hire the right people",
            &["Sourcing", "Interviewing", "Employer Branding", "ATS Tools", "Negotiation"], (55_000, 95_000),
            "High - Competition for talent stays intense"),
        path("People Operations Manager", "Design people processes and culture",
            &["HR Strategy", "Performance Management", "HR Analytics", "Compliance", "Leadership"], (75_000, 130_000),
            "High - People ops is a strategic function"),
    ]),
    (DomainId::Healthcare, [
        path("Health Informatics Specialist", "Manage and analyze clinical data systems",
            &["EHR Systems", "Healthcare Data", "SQL", "Privacy Regulations", "Analytics"], (65_000, 115_000),
            "High - Healthcare digitization is accelerating"),
        path("Clinical Research Coordinator", "Run clinical trials and studies",
            &["Clinical Protocols", "Data Collection", "Regulatory Compliance", "Patient Communication", "Documentation"], (50_000, 85_000),
            "Medium - Research pipelines keep expanding"),
        path("Healthcare Administrator", "Run healthcare facilities and operations",
            &["Healthcare Management", "Budgeting", "Compliance", "Leadership", "Operations"], (70_000, 125_000),
            "High - Aging populations increase demand"),
    ]),
    (DomainId::EducationTraining, [
        path("Instructional Designer", "Design effective learning experiences",
            &["Curriculum Design", "E-learning Tools", "Learning Theory", "Assessment", "Storyboarding"], (60_000, 100_000),
            "High - Online learning keeps growing"),
        path("Corporate Trainer", "Teach skills to employees",
            &["Presentation", "Training Design", "Facilitation", "Coaching", "Evaluation"], (55_000, 95_000),
            "Medium - Upskilling is a business priority"),
        path("EdTech Content Developer", "Create content for learning platforms",
            &["Content Creation", "Video Production", "Subject Expertise", "LMS", "Assessment Design"], (50_000, 90_000),
            "High - EdTech platforms need quality content"),
    ]),
    (DomainId::VideoMediaProduction, [
        path("Video Editor", "Edit footage into compelling stories",
            &["Premiere Pro", "Final Cut", "Color Grading", "Audio Editing", "Storytelling"], (45_000, 85_000),
            "High - Video dominates online content"),
        path("Motion Graphics Designer", "Animate graphics for video and products",
            &["After Effects", "Animation", "Typography", "Cinema 4D", "Design Principles"], (55_000, 100_000),
            "High - Brands invest heavily in motion content"),
        path("Content Producer", "Plan and produce media content",
            &["Production Planning", "Scriptwriting", "Camera Work", "Editing", "Project Coordination"], (50_000, 95_000),
            "Medium - Creator economy keeps expanding"),
    ]),
    (DomainId::MechanicalEngineering, [
        path("Mechanical Design Engineer", "Design mechanical components and systems",
            &["SolidWorks", "AutoCAD", "GD&T", "Materials", "Prototyping"], (65_000, 115_000),
            "Medium - Manufacturing and product companies hire steadily"),
        path("Manufacturing Engineer", "Improve how products are built",
            &["Lean Manufacturing", "Process Design", "CAD", "Quality Control", "Automation"], (65_000, 110_000),
            "Medium - Automation is reshaping factories"),
        path("Simulation Engineer", "Analyze designs with computer simulation",
            &["ANSYS", "FEA", "CFD", "MATLAB", "Thermodynamics"], (75_000, 130_000),
            "High - Simulation reduces costly prototypes"),
    ]),
    (DomainId::ElectricalEngineering, [
        path("Electrical Design Engineer", "Design electrical systems and circuits",
            &["Circuit Design", "PCB Layout", "Power Systems", "Simulation", "Standards"], (70_000, 120_000),
            "Medium - Electrification drives demand"),
        path("Controls Engineer", "Automate machines and processes",
            &["PLC Programming", "Control Systems", "SCADA", "MATLAB", "Instrumentation"], (70_000, 125_000),
            "High - Industrial automation is growing"),
        path("Power Systems Engineer", "Plan and maintain power grids",
            &["Power Systems", "Renewable Energy", "Grid Analysis", "Protection Systems", "Simulation"], (75_000, 135_000),
            "High - Energy transition needs grid expertise"),
    ]),
    (DomainId::CivilArchitecture, [
        path("Civil Engineer", "Design and oversee infrastructure projects",
            &["AutoCAD", "Structural Analysis", "Project Management", "Surveying", "Codes & Standards"], (60_000, 110_000),
            "Medium - Infrastructure spending is steady"),
        path("Architect", "Design buildings and spaces",
            &["Revit", "Architectural Design", "Building Codes", "3D Visualization", "Sustainability"], (60_000, 120_000),
            "Medium - Construction cycles drive demand"),
        path("BIM Specialist", "Manage digital building models",
            &["Revit", "BIM Standards", "Navisworks", "Coordination", "Documentation"], (60_000, 105_000),
            "High - BIM is becoming mandatory on large projects"),
    ]),
    (DomainId::Legal, [
        path("Legal Analyst", "Research and analyze legal matters",
            &["Legal Research", "Writing", "Case Analysis", "Regulations", "Attention to Detail"], (50_000, 90_000),
            "Medium - Legal services stay in demand"),
        path("Compliance Officer", "Keep organizations within the rules",
            &["Regulatory Knowledge", "Risk Assessment", "Policies", "Auditing", "Reporting"], (65_000, 120_000),
            "High - Regulation keeps expanding"),
        path("Contract Manager", "Draft, negotiate and manage contracts",
            &["Contract Law", "Negotiation", "Drafting", "Risk Management", "Communication"], (65_000, 115_000),
            "Medium - Every business runs on contracts"),
    ]),
    (DomainId::CustomerSupport, [
        path("Customer Success Manager", "Help customers get value from the product",
            &["Relationship Management", "Product Knowledge", "Onboarding", "CRM", "Communication"], (55_000, 100_000),
            "High - Retention is a priority for SaaS companies"),
        path("Technical Support Engineer", "Solve technical problems for customers",
            &["Troubleshooting", "Networking Basics", "Ticketing Systems", "Scripting", "Communication"], (50_000, 90_000),
            "Medium - Complex products need skilled support"),
        path("Support Operations Analyst", "Improve support processes and tooling",
            &["Zendesk", "Process Design", "Data Analysis", "Automation", "Reporting"], (50_000, 90_000),
            "Medium - Support teams are scaling with automation"),
    ]),
];
