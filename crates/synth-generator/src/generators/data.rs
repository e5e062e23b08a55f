//! Fixed seed lists sampled by the built-in generators.

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Carlos", "Maria", "Wei", "Aisha", "Hiroshi", "Priya", "Olivia", "Liam", "Emma", "Noah",
    "Sofia", "Mateo",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Chen", "Patel",
    "Nguyen", "Kim", "Okafor",
];

pub const GENDERS: &[&str] = &["Male", "Female", "Non-binary"];

pub const EMAIL_DOMAINS: &[&str] = &[
    "example.com", "mail.com", "test.org", "inbox.net", "sample.io",
];

pub const STREET_NAMES: &[&str] = &[
    "Main", "Oak", "Pine", "Maple", "Cedar", "Elm", "Washington", "Lake", "Hill", "Park",
    "Sunset", "River", "Church", "Highland", "Meadow",
];

pub const STREET_SUFFIXES: &[&str] = &["St", "Ave", "Blvd", "Rd", "Ln", "Dr", "Ct", "Way"];

pub const CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia", "San Antonio",
    "San Diego", "Dallas", "Austin", "Seattle", "Denver", "Boston", "Portland", "Atlanta",
    "Miami", "Minneapolis", "Nashville", "Columbus", "Charlotte",
];

pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

pub const COUNTRIES: &[&str] = &[
    "United States", "Canada", "Mexico", "United Kingdom", "Germany", "France", "Spain",
    "Italy", "Japan", "Brazil", "India", "Australia", "Nigeria", "South Korea", "Netherlands",
];

pub const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "Corp", "Partners", "Holdings"];

pub const JOB_TITLES: &[&str] = &[
    "Software Engineer", "Product Manager", "Data Analyst", "Accountant", "Sales Representative",
    "Marketing Coordinator", "HR Specialist", "Operations Manager", "Nurse Practitioner",
    "Customer Success Manager", "Financial Analyst", "Graphic Designer", "Project Manager",
    "Business Analyst", "Registered Nurse",
];

pub const DEPARTMENTS: &[&str] = &[
    "Engineering", "Sales", "Marketing", "Finance", "Human Resources", "Operations", "Legal",
    "Customer Support", "Research", "Procurement",
];

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Ergonomic", "Rustic", "Sleek", "Practical", "Refined", "Handcrafted", "Incredible",
    "Gorgeous", "Durable", "Smart",
];

pub const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Cotton", "Granite", "Plastic", "Rubber", "Bamboo", "Leather",
];

pub const PRODUCT_NOUNS: &[&str] = &[
    "Chair", "Table", "Lamp", "Keyboard", "Backpack", "Bottle", "Watch", "Jacket", "Mug",
    "Speaker",
];

pub const CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CHF", "INR"];

pub const ORDER_STATUSES: &[&str] = &[
    "pending", "processing", "shipped", "delivered", "cancelled", "returned",
];

pub const TLDS: &[&str] = &["com", "net", "org", "io", "dev", "co"];

pub const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "commodo", "consequat",
];

/// ICD-10 codes paired with their descriptions.
pub const ICD10: &[(&str, &str)] = &[
    ("E11.9", "Type 2 diabetes mellitus without complications"),
    ("I10", "Essential (primary) hypertension"),
    ("J45.909", "Unspecified asthma, uncomplicated"),
    ("M54.5", "Low back pain"),
    ("F41.1", "Generalized anxiety disorder"),
    ("F32.9", "Major depressive disorder, single episode"),
    ("E78.5", "Hyperlipidemia, unspecified"),
    ("J06.9", "Acute upper respiratory infection"),
    ("N39.0", "Urinary tract infection"),
    ("K21.9", "Gastro-esophageal reflux disease"),
    ("I25.10", "Atherosclerotic heart disease"),
    ("G43.909", "Migraine, unspecified"),
];

pub const MEDICATIONS: &[&str] = &[
    "Lisinopril", "Metformin", "Atorvastatin", "Amlodipine", "Omeprazole", "Levothyroxine",
    "Albuterol", "Sertraline", "Gabapentin", "Losartan", "Simvastatin", "Amoxicillin",
];

pub const DOSAGE_AMOUNTS: &[u32] = &[5, 10, 20, 25, 40, 50, 100, 250, 500, 1000];

pub const DOSAGE_FREQUENCIES: &[&str] = &[
    "once daily", "twice daily", "three times daily", "every 8 hours", "as needed", "at bedtime",
];

pub const BLOOD_TYPES: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub const ALLERGIES: &[&str] = &[
    "Penicillin", "Peanuts", "Shellfish", "Latex", "Sulfa drugs", "Pollen", "Dust mites",
    "Eggs", "Aspirin", "None known",
];

pub const INSURANCE_PROVIDERS: &[&str] = &[
    "Aetna", "Blue Cross Blue Shield", "Cigna", "UnitedHealthcare", "Humana", "Kaiser Permanente",
    "Medicare", "Medicaid",
];

pub const CLAIM_STATUSES: &[&str] = &[
    "Submitted", "Pending", "Approved", "Denied", "Paid", "Appealed",
];

pub const LAB_TESTS: &[&str] = &[
    "Complete Blood Count", "Basic Metabolic Panel", "Lipid Panel", "Hemoglobin A1c",
    "Thyroid Stimulating Hormone", "Urinalysis", "Liver Function Panel", "Vitamin D",
    "Prothrombin Time", "C-Reactive Protein",
];

pub const CPT_CODES: &[&str] = &[
    "99213", "99214", "99203", "93000", "80053", "85025", "36415", "71046", "81002", "90471",
];
