use yew::prelude::*;

const CERTIFICATIONS: [&str; 4] = ["CompTIA Security+", "CEH", "CompTIA Pentest+", "EC-Council C|SA"];

const STATS: [(&str, &str); 4] = [
    ("50+", "Security Audits"),
    ("2+", "Years Experience"),
    ("99.9%", "Threat Detection"),
    ("50+", "Tools Mastered"),
];

struct SkillCategory {
    name: &'static str,
    skills: &'static [(&'static str, u8)],
}

const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        name: "Penetration Testing",
        skills: &[
            ("Network Penetration Testing", 95),
            ("Web Application Testing", 92),
            ("Mobile Application Testing", 88),
            ("Social Engineering", 90),
        ],
    },
    SkillCategory {
        name: "Security Tools",
        skills: &[("Metasploit", 96), ("Burp Suite", 94), ("Nmap", 98), ("Wireshark", 92)],
    },
    SkillCategory {
        name: "Infrastructure Security",
        skills: &[
            ("Network Security", 94),
            ("Firewall Configuration", 91),
            ("IDS/IPS Management", 89),
            ("VPN Implementation", 93),
        ],
    },
    SkillCategory {
        name: "Cloud Security",
        skills: &[
            ("AWS Security", 90),
            ("Azure Security", 87),
            ("Container Security", 85),
            ("DevSecOps", 88),
        ],
    },
];

struct Project {
    title: &'static str,
    description: &'static str,
    tech: &'static [&'static str],
    features: &'static [&'static str],
}

const PROJECTS: [Project; 6] = [
    Project {
        title: "Recon Automation Framework",
        description: "Lightweight automated reconnaissance tool that performs subdomain discovery, port scanning, tech fingerprinting, and directory enumeration with structured output.",
        tech: &["Python", "Bash", "asyncio", "Nmap", "Requests"],
        features: &["Subdomain Enumeration", "Port Scanning", "Tech Detection", "Screenshot Automation"],
    },
    Project {
        title: "OSINT Profile Scraper",
        description: "Custom OSINT tool for username discovery, metadata extraction, and cross-platform identity correlation using automated scraping workflows.",
        tech: &["Python", "Requests", "BeautifulSoup", "Regex"],
        features: &["Username Lookup", "Metadata Extraction", "Social Discovery", "Email/Phone Patterns"],
    },
    Project {
        title: "Active Directory Attack Simulator",
        description: "Local AD attack lab automating enumeration, Kerberoasting, AS-REP roasting, and SMB abuse for training and research.",
        tech: &["PowerShell", "Python", "Impacket"],
        features: &["Kerberoasting", "AS-REP Roast", "SMB Enumeration", "User/Group Discovery"],
    },
    Project {
        title: "Web Fuzzing Engine",
        description: "High-performance HTTP fuzzing engine for reflection detection, hidden parameter discovery, and WAF behavior mapping.",
        tech: &["Python", "Asyncio", "Requests", "AIOHTTP"],
        features: &["Parameter Fuzzing", "Reflection Detection", "Status Anomalies", "WAF Trigger Mapping"],
    },
    Project {
        title: "Subdomain Takeover Scanner",
        description: "Automated scanner that detects vulnerable CNAME records and potential subdomain takeover vectors across major cloud providers.",
        tech: &["Python", "DNSPython", "Requests"],
        features: &["CNAME Enumeration", "Provider Identification", "Takeover Detection", "PoC Generator"],
    },
    Project {
        title: "JWT Security Toolkit",
        description: "Comprehensive JWT analyzer that performs decoding, weak-key hunting, algorithm downgrade checks, and claim extraction.",
        tech: &["Python", "JavaScript", "PyJWT", "Node.js"],
        features: &["JWT Decoder", "Weak Key Detection", "Alg Downgrade Check", "Claim Extraction"],
    },
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="page-section">
            <h2 class="section-title">{"About Me"}</h2>
            <div class="about-grid">
                <div class="about-text">
                    <p>
                        {"With years of hands-on experience in cybersecurity, I focus on offensive security, deep threat analysis, \
                          and designing secure infrastructures. My goal is to help organizations stay resilient against \
                          constantly evolving cyber risks with strategic and modern defense methodologies."}
                    </p>
                    <p>
                        {"I've strengthened security for enterprises, tech firms, and emerging businesses. My skill set covers \
                          red teaming, vulnerability assessment, cloud defense, and incident handling."}
                    </p>
                    <div class="cert-list">
                        { for CERTIFICATIONS.iter().map(|cert| html! { <span key={*cert} class="cert-badge">{*cert}</span> }) }
                    </div>
                </div>
            </div>
            <div class="stats-grid">
                { for STATS.iter().map(|(number, label)| html! {
                    <div key={*label} class="stat-card">
                        <div class="stat-number">{*number}</div>
                        <div class="stat-label">{*label}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(SkillsSection)]
pub fn skills_section() -> Html {
    // Only the card under the cursor shows its percentage.
    let hovered_skill = use_state(|| None::<&'static str>);

    let skill_row = |name: &'static str, level: u8| {
        let on_enter = {
            let hovered_skill = hovered_skill.clone();
            Callback::from(move |_: MouseEvent| hovered_skill.set(Some(name)))
        };
        let on_leave = {
            let hovered_skill = hovered_skill.clone();
            Callback::from(move |_: MouseEvent| hovered_skill.set(None))
        };
        html! {
            <div key={name} class="skill-row" onmouseenter={on_enter} onmouseleave={on_leave}>
                <span class="skill-name">{name}</span>
                {
                    if *hovered_skill == Some(name) {
                        html! { <span class="skill-level">{format!("{}%", level)}</span> }
                    } else {
                        html! {}
                    }
                }
                <div class="skill-bar">
                    <div class="skill-bar-fill" style={format!("width: {}%;", level)}></div>
                </div>
            </div>
        }
    };

    html! {
        <section id="skills" class="page-section">
            <h2 class="section-title">{"Technical Arsenal"}</h2>
            <div class="skills-grid">
                { for SKILL_CATEGORIES.iter().map(|category| html! {
                    <div key={category.name} class="skill-card">
                        <h3>{category.name}</h3>
                        { for category.skills.iter().map(|&(name, level)| skill_row(name, level)) }
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    html! {
        <section id="projects" class="page-section">
            <h2 class="section-title">{"Featured Projects"}</h2>
            <p class="section-subtitle">
                {"Cutting-edge cybersecurity solutions that have protected organizations worldwide"}
            </p>
            <div class="projects-grid">
                { for PROJECTS.iter().map(|project| html! {
                    <div key={project.title} class="project-card">
                        <h3>{project.title}</h3>
                        <p>{project.description}</p>
                        <ul class="feature-list">
                            { for project.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                        </ul>
                        <div class="tech-list">
                            { for project.tech.iter().map(|tech| html! { <span class="tech-tag">{*tech}</span> }) }
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}
