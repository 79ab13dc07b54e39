//! Static gazetteer tables.
//!
//! Names are lowercase nominative. Where two settlements share a name the
//! better-known one is listed first; that order is the ambiguity priority
//! when no region hint disambiguates.

pub struct City {
    pub name: &'static str,
    /// Oblast adjective ("київська"), used for hint disambiguation.
    pub oblast: &'static str,
    pub lat: f64,
    pub lng: f64,
}

macro_rules! city {
    ($name:literal, $oblast:literal, $lat:literal, $lng:literal) => {
        City { name: $name, oblast: $oblast, lat: $lat, lng: $lng }
    };
}

pub const CITIES: &[City] = &[
    city!("київ", "київська", 50.4501, 30.5234),
    city!("харків", "харківська", 49.9935, 36.2304),
    city!("одеса", "одеська", 46.4825, 30.7233),
    city!("дніпро", "дніпропетровська", 48.4647, 35.0462),
    city!("запоріжжя", "запорізька", 47.8388, 35.1396),
    city!("львів", "львівська", 49.8397, 24.0297),
    city!("миколаїв", "миколаївська", 46.9750, 31.9946),
    city!("херсон", "херсонська", 46.6354, 32.6169),
    city!("чернігів", "чернігівська", 51.4982, 31.2893),
    city!("полтава", "полтавська", 49.5884, 34.5514),
    city!("суми", "сумська", 50.9077, 34.7981),
    city!("вінниця", "вінницька", 49.2328, 28.4810),
    city!("житомир", "житомирська", 50.2547, 28.6587),
    city!("черкаси", "черкаська", 49.4444, 32.0597),
    city!("кропивницький", "кіровоградська", 48.5079, 32.2623),
    city!("рівне", "рівненська", 50.6199, 26.2516),
    city!("луцьк", "волинська", 50.7472, 25.3254),
    city!("ужгород", "закарпатська", 48.6208, 22.2879),
    city!("тернопіль", "тернопільська", 49.5535, 25.5947),
    city!("хмельницький", "хмельницька", 49.4229, 26.9873),
    city!("чернівці", "чернівецька", 48.2917, 25.9354),
    city!("івано-франківськ", "івано-франківська", 48.9226, 24.7111),
    city!("донецьк", "донецька", 48.0159, 37.8028),
    city!("луганськ", "луганська", 48.5740, 39.3078),
    // Kyiv oblast belt
    city!("біла церква", "київська", 49.7950, 30.1310),
    city!("бровари", "київська", 50.5111, 30.7900),
    city!("бориспіль", "київська", 50.3527, 30.9550),
    city!("обухів", "київська", 50.1072, 30.6211),
    city!("вишгород", "київська", 50.5850, 30.4890),
    city!("ірпінь", "київська", 50.5218, 30.2506),
    city!("буча", "київська", 50.5436, 30.2120),
    city!("гостомель", "київська", 50.5845, 30.2524),
    city!("васильків", "київська", 50.1855, 30.3133),
    city!("фастів", "київська", 50.0766, 29.9181),
    city!("петрівці", "київська", 50.6386, 30.4316),
    // Chernihiv / Sumy directions
    city!("ніжин", "чернігівська", 51.0480, 31.8860),
    city!("борзна", "чернігівська", 51.2547, 32.4180),
    city!("прилуки", "чернігівська", 50.5931, 32.3878),
    city!("бахмач", "чернігівська", 51.1833, 32.8333),
    city!("конотоп", "сумська", 51.2402, 33.2023),
    city!("шостка", "сумська", 51.8667, 33.4833),
    city!("ромни", "сумська", 50.7428, 33.4879),
    city!("охтирка", "сумська", 50.3103, 34.8988),
    city!("глухів", "сумська", 51.6781, 33.9080),
    city!("велика писарівка", "сумська", 50.4264, 35.4848),
    // Kharkiv oblast
    city!("ізюм", "харківська", 49.2128, 37.2972),
    city!("куп'янськ", "харківська", 49.7064, 37.6167),
    city!("лозова", "харківська", 48.8894, 36.3172),
    city!("чугуїв", "харківська", 49.8353, 36.6880),
    city!("балаклія", "харківська", 49.4564, 36.8389),
    city!("сахновщина", "харківська", 49.1544, 35.1468),
    // Dnipro / Zaporizhzhia
    city!("кривий ріг", "дніпропетровська", 47.9105, 33.3918),
    city!("кременчук", "полтавська", 49.0670, 33.4204),
    city!("павлоград", "дніпропетровська", 48.5350, 35.8700),
    city!("нікополь", "дніпропетровська", 47.5772, 34.3575),
    city!("кам'янське", "дніпропетровська", 48.5110, 34.6021),
    city!("синельникове", "дніпропетровська", 48.3178, 35.5119),
    city!("мелітополь", "запорізька", 46.8489, 35.3650),
    city!("бердянськ", "запорізька", 46.7553, 36.7885),
    city!("енергодар", "запорізька", 47.4989, 34.6558),
    city!("оріхів", "запорізька", 47.5672, 35.7856),
    city!("гуляйполе", "запорізька", 47.6631, 36.2586),
    // South
    city!("первомайськ", "миколаївська", 48.0445, 30.8508),
    city!("вознесенськ", "миколаївська", 47.5698, 31.3338),
    city!("очаків", "миколаївська", 46.6128, 31.5455),
    city!("ізмаїл", "одеська", 45.3516, 28.8365),
    city!("білгород-дністровський", "одеська", 46.1871, 30.3455),
    city!("чорноморськ", "одеська", 46.3017, 30.6498),
    city!("каховка", "херсонська", 46.8131, 33.4800),
    city!("нова каховка", "херсонська", 46.7545, 33.3485),
    city!("генічеськ", "херсонська", 46.1750, 34.8058),
    // Center / Donbas
    city!("умань", "черкаська", 48.7484, 30.2219),
    city!("сміла", "черкаська", 49.2228, 31.8877),
    city!("олександрія", "кіровоградська", 48.6667, 33.1167),
    city!("світловодськ", "кіровоградська", 49.0500, 33.2500),
    city!("миргород", "полтавська", 49.9647, 33.6126),
    city!("краматорськ", "донецька", 48.7389, 37.5848),
    city!("слов'янськ", "донецька", 48.8534, 37.6052),
    city!("маріуполь", "донецька", 47.0971, 37.5434),
    city!("бахмут", "донецька", 48.5948, 38.0000),
    city!("покровськ", "донецька", 48.2820, 37.1763),
    city!("авдіївка", "донецька", 48.1439, 37.7486),
    city!("сєвєродонецьк", "луганська", 48.9482, 38.4918),
    city!("лисичанськ", "луганська", 48.9041, 38.4427),
    // West
    city!("коростень", "житомирська", 50.9555, 28.6470),
    city!("бердичів", "житомирська", 49.8916, 28.6003),
    city!("звягель", "житомирська", 50.5869, 27.6237),
    city!("ковель", "волинська", 51.2153, 24.7086),
    city!("мукачево", "закарпатська", 48.4414, 22.7136),
    city!("дрогобич", "львівська", 49.3500, 23.5000),
    city!("стрий", "львівська", 49.2631, 23.8520),
    city!("червоноград", "львівська", 50.3822, 24.2275),
    city!("калуш", "івано-франківська", 49.0425, 24.3736),
    city!("коломия", "івано-франківська", 48.5289, 25.0364),
    city!("старокостянтинів", "хмельницька", 49.7572, 27.2039),
    city!("шепетівка", "хмельницька", 50.1833, 27.0667),
    // shared names, best-known first
    city!("золочів", "львівська", 49.8052, 24.9039),
    city!("золочів", "харківська", 50.2790, 35.9822),
    city!("первомайський", "харківська", 49.3869, 36.2144),
];

/// Spelling and inflection aliases the suffix rules cannot reach.
pub const CITY_ALIASES: &[(&str, &str)] = &[
    ("києва", "київ"),
    ("києві", "київ"),
    ("киев", "київ"),
    ("киеве", "київ"),
    ("kyiv", "київ"),
    ("харьков", "харків"),
    ("харькове", "харків"),
    ("одесу", "одеса"),
    ("одесі", "одеса"),
    ("одесса", "одеса"),
    ("дніпра", "дніпро"),
    ("дніпрі", "дніпро"),
    ("днепр", "дніпро"),
    ("запоріжжі", "запоріжжя"),
    ("запорожье", "запоріжжя"),
    ("львова", "львів"),
    ("львові", "львів"),
    ("миколаєва", "миколаїв"),
    ("миколаєві", "миколаїв"),
    ("николаев", "миколаїв"),
    ("херсоні", "херсон"),
    ("чернігові", "чернігів"),
    ("кривому розі", "кривий ріг"),
    ("кривий рог", "кривий ріг"),
    ("білій церкві", "біла церква"),
    ("білу церкву", "біла церква"),
    ("новоград-волинський", "звягель"),
    ("нові петрівці", "петрівці"),
    ("нових петрівцях", "петрівці"),
    ("словʼянськ", "слов'янськ"),
    ("кропивницькому", "кропивницький"),
    ("тернополі", "тернопіль"),
    ("луцьку", "луцьк"),
    ("ужгороді", "ужгород"),
];

/// Oblast centroids keyed by the adjective form.
pub const OBLASTS: &[(&str, f64, f64)] = &[
    ("київська", 50.4501, 30.5234),
    ("харківська", 49.9935, 36.2304),
    ("одеська", 46.4825, 30.7233),
    ("дніпропетровська", 48.4647, 35.0462),
    ("запорізька", 47.8388, 35.1396),
    ("львівська", 49.8397, 24.0297),
    ("донецька", 48.0159, 37.8028),
    ("полтавська", 49.5884, 34.5514),
    ("вінницька", 49.2328, 28.4810),
    ("миколаївська", 46.9750, 31.9946),
    ("херсонська", 46.6354, 32.6169),
    ("чернігівська", 51.4982, 31.2893),
    ("черкаська", 49.4444, 32.0597),
    ("житомирська", 50.2547, 28.6587),
    ("сумська", 50.9077, 34.7981),
    ("хмельницька", 49.4229, 26.9873),
    ("чернівецька", 48.2917, 25.9354),
    ("рівненська", 50.6199, 26.2516),
    ("івано-франківська", 48.9226, 24.7111),
    ("тернопільська", 49.5535, 25.5947),
    ("волинська", 50.7472, 25.3254),
    ("закарпатська", 48.6208, 22.2879),
    ("кіровоградська", 48.5079, 32.2623),
    ("луганська", 48.5740, 39.3078),
];

/// Colloquial oblast names: `-щина` forms and historic region names.
pub const OBLAST_ALIASES: &[(&str, &str)] = &[
    ("київщина", "київська"),
    ("харківщина", "харківська"),
    ("одещина", "одеська"),
    ("дніпропетровщина", "дніпропетровська"),
    ("запоріжжя", "запорізька"),
    ("львівщина", "львівська"),
    ("донеччина", "донецька"),
    ("полтавщина", "полтавська"),
    ("вінниччина", "вінницька"),
    ("миколаївщина", "миколаївська"),
    ("херсонщина", "херсонська"),
    ("чернігівщина", "чернігівська"),
    ("черкащина", "черкаська"),
    ("житомирщина", "житомирська"),
    ("сумщина", "сумська"),
    ("хмельниччина", "хмельницька"),
    ("буковина", "чернівецька"),
    ("рівненщина", "рівненська"),
    ("прикарпаття", "івано-франківська"),
    ("франківщина", "івано-франківська"),
    ("тернопільщина", "тернопільська"),
    ("волинь", "волинська"),
    ("закарпаття", "закарпатська"),
    ("кіровоградщина", "кіровоградська"),
    ("луганщина", "луганська"),
];

/// Raions referenced by adjective stem ("вишгородський район").
pub const RAIONS: &[(&str, &str, f64, f64)] = &[
    ("вишгородськ", "київська", 50.5850, 30.4890),
    ("бучанськ", "київська", 50.5436, 30.2120),
    ("обухівськ", "київська", 50.1072, 30.6211),
    ("броварськ", "київська", 50.5111, 30.7900),
    ("бориспільськ", "київська", 50.3527, 30.9550),
    ("фастівськ", "київська", 50.0766, 29.9181),
    ("білоцерківськ", "київська", 49.7950, 30.1310),
    ("ніжинськ", "чернігівська", 51.0480, 31.8860),
    ("новгород-сіверськ", "чернігівська", 52.0039, 33.2622),
    ("конотопськ", "сумська", 51.2402, 33.2023),
    ("шосткинськ", "сумська", 51.8667, 33.4833),
    ("охтирськ", "сумська", 50.3103, 34.8988),
    ("роменськ", "сумська", 50.7428, 33.4879),
    ("ізюмськ", "харківська", 49.2128, 37.2972),
    ("куп'янськ", "харківська", 49.7064, 37.6167),
    ("лозівськ", "харківська", 48.8894, 36.3172),
    ("чугуївськ", "харківська", 49.8353, 36.6880),
    ("богодухівськ", "харківська", 50.1644, 35.5275),
    ("красноградськ", "харківська", 49.3744, 35.4431),
    ("криворізьк", "дніпропетровська", 47.9105, 33.3918),
    ("павлоградськ", "дніпропетровська", 48.5350, 35.8700),
    ("нікопольськ", "дніпропетровська", 47.5772, 34.3575),
    ("синельниківськ", "дніпропетровська", 48.3178, 35.5119),
    ("мелітопольськ", "запорізька", 46.8489, 35.3650),
    ("бердянськ", "запорізька", 46.7553, 36.7885),
    ("пологівськ", "запорізька", 47.4840, 36.2536),
    ("вознесенськ", "миколаївська", 47.5698, 31.3338),
    ("первомайськ", "миколаївська", 48.0445, 30.8508),
    ("ізмаїльськ", "одеська", 45.3516, 28.8365),
    ("білгород-дністровськ", "одеська", 46.1871, 30.3455),
    ("бериславськ", "херсонська", 46.8372, 33.4281),
    ("уманськ", "черкаська", 48.7484, 30.2219),
    ("золотоніськ", "черкаська", 49.6614, 32.0402),
    ("кременчуцьк", "полтавська", 49.0670, 33.4204),
    ("миргородськ", "полтавська", 49.9647, 33.6126),
    ("краматорськ", "донецька", 48.7389, 37.5848),
    ("покровськ", "донецька", 48.2820, 37.1763),
    ("коростенськ", "житомирська", 50.9555, 28.6470),
    ("бердичівськ", "житомирська", 49.8916, 28.6003),
    ("ковельськ", "волинська", 51.2153, 24.7086),
    ("сарненськ", "рівненська", 51.3372, 26.6019),
    ("шепетівськ", "хмельницька", 50.1833, 27.0667),
];
