//! Static page content. Everything here is plain data consumed by the
//! view layer; prose paragraphs with inline links live in the markup
//! instead.

pub const POEM_GROUPS: [[&str; 2]; 3] = [
    [
        "In a quiet bandwidth, a voice hesitates.",
        "Data becomes a choreography of interrupted breaths.",
    ],
    [
        "Silence is a feature we never fully annotated.",
        "Every glitch in the signal feels a little like memory.",
    ],
    [
        "Somewhere between noise and meaning, I am listening.",
        "I wait for the moment a voice begins to forgive itself.",
    ],
];

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SectionAnchor {
    pub anchor: &'static str,
    pub label: &'static str,
}

pub const SECTION_ANCHORS: [SectionAnchor; 8] = [
    SectionAnchor { anchor: "#top", label: "Top" },
    SectionAnchor { anchor: "#about", label: "About" },
    SectionAnchor { anchor: "#research", label: "Publications" },
    SectionAnchor { anchor: "#projects", label: "Projects" },
    SectionAnchor { anchor: "#art-portfolio", label: "Art Portfolio" },
    SectionAnchor { anchor: "#exhibitions", label: "Exhibitions" },
    SectionAnchor { anchor: "#clinical", label: "Clinical Training" },
    SectionAnchor { anchor: "#education", label: "Education" },
];

/// Venue badge on a publication card: either an unlinked badge carrying a
/// manuscript status, or a plain link to the venue itself.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Venue {
    pub label: &'static str,
    pub status: Option<&'static str>,
    pub href: Option<&'static str>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Publication {
    pub date_range: &'static str,
    pub title: &'static str,
    pub lab: &'static str,
    pub advisor: &'static str,
    pub summary: &'static str,
    pub venue: Venue,
    pub documents: &'static [Link],
    pub tags: &'static [&'static str],
    pub first_author: bool,
}

pub fn publications() -> &'static [Publication] {
    &[
        Publication {
            date_range: "Oct 2025 – Present",
            title: "Speech-Based Depression Detection",
            lab: "Smile Lab, Johns Hopkins University",
            advisor: "Advised by Dr. Berrak Sisman",
            summary: "Deep-learning analysis of depressive and emotional expression across \
                clinical and spontaneous speech corpora. Work integrates prosodic, spectral, \
                and semantic features with an emphasis on interpretability and clinically \
                meaningful acoustic–linguistic modeling. A first-author manuscript is being \
                prepared for INTERSPEECH 2026.",
            venue: Venue {
                label: "INTERSPEECH",
                status: Some("Manuscript in preparation"),
                href: None,
            },
            documents: &[],
            tags: &["Speech & language", "Depression detection", "Deep learning"],
            first_author: true,
        },
        Publication {
            date_range: "Oct 2025 – Present",
            title: "Attribution & Psycholinguistics",
            lab: "REALM Lab, The University of Texas at Dallas",
            advisor: "Advised by Dr. Ryan L. Boyd",
            summary: "Large-scale modeling of attributional language using AttributioNet \
                across datasets such as BPD MTurk, TED Talks, and the Blog Authorship Corpus. \
                Work includes data quality filtering, aggregation, reliability checks, and \
                correlation analyses linking explanatory styles to validated psychological \
                scales.",
            venue: Venue {
                label: "Journal article",
                status: Some("Paper planned"),
                href: None,
            },
            documents: &[],
            tags: &["Psycholinguistics", "Attribution modeling", "Large-scale text"],
            first_author: false,
        },
        Publication {
            date_range: "Aug 2025 – Present",
            title: "Medical Imaging Interaction & Web-Based CT Viewer",
            lab: "CCVL / BodyMaps, Johns Hopkins University",
            advisor: "Advised by Dr. Zongwei Zhou",
            summary: "Developer for a web-based CT search-and-viewer system for large \
                thoracic segmentation datasets (PanTS, 300GB+). The interface supports \
                structured case search, slice navigation, organ mask overlays, opacity \
                controls, and PNG/GIF/video export, and serves as a front-end prototype for \
                the BodyMaps platform.",
            venue: Venue {
                label: "MICCAI",
                status: Some("Manuscript in preparation"),
                href: None,
            },
            documents: &[],
            tags: &["Medical imaging", "Web-based CT viewer", "TypeScript / React"],
            first_author: false,
        },
        Publication {
            date_range: "May 2025 – Oct 2025",
            title: "Music, Emotion, and Memory – Melody2Memory Project",
            lab: "Institute for AI Industry Research (AIR), Tsinghua University",
            advisor: "Advised by Dr. Jiangtao Gong",
            summary: "Collaborative HCI study on how AI-generated multimodal cues (music and \
                imagery) shape autobiographical memory recall, emotional processing, and \
                cognitive reappraisal. Contributions include experimental design, \
                psychological scale construction, survey implementation, quantitative \
                modeling, and interpretation of findings.",
            venue: Venue {
                label: "IMWUT",
                status: Some("Under review"),
                href: None,
            },
            documents: &[],
            tags: &["HCI", "Emotion & memory", "Multimodal interaction"],
            first_author: false,
        },
        Publication {
            date_range: "Mar 2025 – Oct 2025",
            title: "Trauma-Informed Linguistic Analysis of Scam-Based Human Trafficking",
            lab: "Trauma Intervention Research Team, Johns Hopkins School of Nursing",
            advisor: "Advised by Dr. Tamar Rodney",
            summary: "A trauma-informed review examining linguistic, technological, \
                psychological, and structural dimensions of scam-based human trafficking. \
                The manuscript synthesizes interdisciplinary work on coercion, exploitation, \
                help-seeking, and trauma recovery.",
            venue: Venue {
                label: "Trauma, Violence & Abuse",
                status: Some("Under review"),
                href: None,
            },
            documents: &[],
            tags: &["Trauma & linguistics", "Human trafficking", "Interdisciplinary review"],
            first_author: true,
        },
        Publication {
            date_range: "Nov 2024 – Dec 2025",
            title: "Linguistic Patterns in Trauma Intervention and Recovery",
            lab: "Trauma Intervention Research Team, Johns Hopkins School of Nursing",
            advisor: "Advised by Dr. Tamar Rodney",
            summary: "Empirical work in progress developing a framework for analyzing \
                language used in trauma intervention contexts, with attention to emotion \
                expression, cognitive processing, and interpersonal dynamics. Planned as a \
                subsequent empirical paper building on the existing review.",
            venue: Venue {
                label: "Journal article",
                status: Some("Manuscript in preparation"),
                href: None,
            },
            documents: &[],
            tags: &["Clinical linguistics", "Trauma intervention", "Quantitative modeling"],
            first_author: true,
        },
        Publication {
            date_range: "Oct 2024 – Present",
            title: "Counseling Processes & Broaching Attitudes",
            lab: "Johns Hopkins University School of Education",
            advisor: "Advised by Dr. Norma Day-Vines",
            summary: "Quantitative study on the relationship between counselors' social \
                dominance attitudes and their broaching orientations in multicultural \
                counseling. Current work focuses on measure design, data collection, and \
                analytic planning for modeling counselor beliefs and behaviors.",
            venue: Venue {
                label: "Journal of Counseling & Development",
                status: Some("Manuscript in preparation"),
                href: None,
            },
            documents: &[],
            tags: &["Multicultural counseling", "Broaching", "Quantitative methods"],
            first_author: false,
        },
        Publication {
            date_range: "Sep 2022 – Apr 2023",
            title: "Prosocial Lying: Linguistic Features via LIWC",
            lab: "Forensic Psychology Lab, Fu Jen Catholic University",
            advisor: "Advised by Dr. Chien Huang",
            summary: "Research examining linguistic markers of prosocial lying using \
                LIWC-based computational lexical analysis. Findings indicate systematic \
                differences in pronoun use, cognitive-process terms, and hesitation markers \
                between prosocial lies and truthful responses.",
            venue: Venue {
                label: "Presented at the Annual Conference of the Taiwanese Association of \
                    Clinical Psychology",
                status: None,
                href: Some(
                    "https://taclip.org.tw/2023%EF%BD%9C%E6%9C%83%E5%93%A1%E5%A4%A7%E6%9C%83%E6%9A%A8%E5%AD%B8%E8%A1%93%E7%A0%94%E8%A8%8E%E6%9C%83/",
                ),
            },
            documents: &[Link {
                label: "Poster (PDF)",
                href: "https://huggingface.co/datasets/jen900704/portfolio-assets/resolve/main/reports/04以電腦化字詞分析探討利社會說謊語言風格.pdf",
            }],
            tags: &["LIWC", "Deception", "Psycholinguistics"],
            first_author: false,
        },
        Publication {
            date_range: "Oct 2022 – Mar 2024",
            title: "Effects of Moral Disengagement, Deindividuation, and Self-Control on \
                Hate-Speech Language",
            lab: "Forensic Psychology Lab, Fu Jen Catholic University",
            advisor: "Advised by Dr. Chien Huang",
            summary: "Competitively funded research (NSTC undergraduate grant, ~30% \
                acceptance rate) examining how moral disengagement, reduced self-control, \
                and deindividuation shape linguistic aggression on social media.",
            venue: Venue {
                label: "NSTC Undergraduate Research Grant",
                status: None,
                href: Some(
                    "https://wsts.nstc.gov.tw/STSWeb/Award/AwardMultiQuery.aspx?year=112&code=QS05&organ=&name=%e8%91%89%e7%bf%94%e7%a6%8e",
                ),
            },
            documents: &[Link {
                label: "Paper (PDF)",
                href: "https://huggingface.co/datasets/jen900704/portfolio-assets/resolve/main/reports/03科技部計畫結案報告.pdf",
            }],
            tags: &["Clinical psychology", "Social media", "Quantitative analysis"],
            first_author: true,
        },
    ]
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub links: &'static [Link],
    pub tags: &'static [&'static str],
}

pub fn projects() -> &'static [Project] {
    &[
        Project {
            title: "Web-Based CT Search & Viewer (BodyMaps / PanTS)",
            summary: "Interactive CT search and visualization interface for large thoracic \
                segmentation datasets (PanTS, 300GB+). Combines a structured case search \
                panel with a 3D viewer that supports slice navigation, organ label overlays, \
                opacity controls, and export of PNG/GIF/video for clinical review and \
                teaching.",
            links: &[
                Link {
                    label: "Code",
                    href: "https://github.com/jen900704/BodyMaps-Search",
                },
                Link {
                    label: "Live demo",
                    href: "https://huggingface.co/spaces/jen900704/PanTS_Search",
                },
            ],
            tags: &["React", "Flask", "Medical imaging"],
        },
        Project {
            title: "Random Forest MDD Severity Prediction",
            summary: "Predictive modeling of baseline MADRS1 using clinical and demographic \
                variables. Implements a linear regression baseline and a Random Forest \
                regressor, with evaluation and feature importance analysis for \
                interpretability.",
            links: &[Link {
                label: "GitHub",
                href: "https://github.com/jen900704/Random-Forest-MDD-Severity-Prediction",
            }],
            tags: &["Python", "scikit-learn"],
        },
        Project {
            title: "TF-IDF Disaster Tweet Classification",
            summary: "Natural language processing project based on the Kaggle \"Natural \
                Language Processing with Disaster Tweets\" competition. Builds a TF-IDF + \
                logistic regression pipeline to classify tweets as disaster-related or \
                non-disaster-related, including text cleaning, feature engineering, model \
                training, evaluation, and creation of a Kaggle submission file.",
            links: &[Link {
                label: "GitHub",
                href: "https://github.com/jen900704/TF-IDF-logistic-regression-disaster-tweet-classification",
            }],
            tags: &["TF-IDF", "Logistic Regression", "NLP"],
        },
        Project {
            title: "PCA and K-Means Clustering",
            summary: "Unsupervised exploration of a tabular dataset using PCA for \
                dimensionality reduction and K-Means clustering. Includes visualizations of \
                cluster structure in the reduced feature space.",
            links: &[Link {
                label: "GitHub",
                href: "https://github.com/jen900704/Unsupervised-learning-using-PCA-and-K-means-clustering",
            }],
            tags: &["Unsupervised learning"],
        },
        Project {
            title: "CNN Cancer Detection",
            summary: "Convolutional neural network for binary cancer image classification \
                on a Kaggle-style dataset. Covers data loading, model definition, training \
                loop, and evaluation metrics.",
            links: &[Link {
                label: "GitHub",
                href: "https://github.com/jen900704/CNN-Cancer-Classification",
            }],
            tags: &["CNN · Medical imaging"],
        },
    ]
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub dates: &'static str,
    pub pills: &'static [&'static str],
    pub outline_pills: &'static [&'static str],
    pub note: Option<&'static str>,
}

pub fn education() -> &'static [Education] {
    &[
        Education {
            degree: "M.S., Clinical Mental Health Counseling",
            school: "Johns Hopkins University",
            dates: "Aug 2024 – May 2027 · expected",
            pills: &[
                "GPA 3.97 / 4.0",
                "JHU Merit Scholarship · USD $16,600 to date (renewable)",
            ],
            outline_pills: &[
                "Chair, Mental Health & Wellbeing Committee (CSI), JHU Lambda Chapter",
            ],
            note: None,
        },
        Education {
            degree: "M.S., Computer Science",
            school: "University of Colorado Boulder",
            dates: "Aug 2024 – Mar 2026 · expected",
            pills: &["GPA 3.97 / 4.0"],
            outline_pills: &[],
            note: None,
        },
        Education {
            degree: "B.A., Applied Arts and Clinical Psychology",
            school: "Fu Jen Catholic University",
            dates: "Sep 2020 – Jun 2024",
            pills: &[
                "GPA 4.0 / 4.0",
                "Ranked 1 / 62 · Graduated first in department",
            ],
            outline_pills: &[],
            note: Some(
                "Primary major in Applied Arts with additional coursework toward a second \
                 major in Clinical Psychology.",
            ),
        },
    ]
}

pub const CV_URL: &str =
    "https://huggingface.co/datasets/jen900704/portfolio-assets/resolve/main/reports/Resume_HCY.pdf";
pub const ART_PORTFOLIO_PDF_URL: &str =
    "https://huggingface.co/datasets/jen900704/portfolio-assets/resolve/main/reports/art-therapy-portfolio-2023.pdf";
pub const EMAIL_URL: &str = "mailto:hyeh10@jh.edu";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/hsiang-chen-yeh-760bb02ba";
