//! Default packing-list template seeded into every new trip.

use super::checklist_model::NewChecklistItem;

pub const CATEGORY_DOCUMENTS: &str = "Documents & Money";
pub const CATEGORY_ELECTRONICS: &str = "Electronics & Chargers";
pub const CATEGORY_CLOTHING: &str = "Clothing & Footwear";
pub const CATEGORY_TOILETRIES: &str = "Toiletries, Health & First Aid";
pub const CATEGORY_ESSENTIALS: &str = "Small but Important";

const DOCUMENTS: &[&str] = &[
    "Passport valid for at least six months",
    "Visa / travel authorization (printed copy plus one in the cloud)",
    "Domestic and international driving licenses (if renting a car)",
    "Flight tickets and booking confirmations (hotels, car, attractions)",
    "Printed travel insurance with emergency phone numbers",
    "Photos of all important documents (cloud and phone)",
    "Cash in local currency for tips and small expenses",
    "Two international credit cards (in case one fails)",
];

const ELECTRONICS: &[&str] = &[
    "Phone and charger",
    "High-capacity power bank plus cable",
    "Headphones (noise-cancelling for the flight)",
    "Universal power adapter",
    "Power strip to charge several devices from one socket",
    "Car charger (if renting a car)",
    "Camera, spare batteries, memory card and charger",
];

const CLOTHING: &[&str] = &[
    "Underwear and socks (days of trip plus two spare)",
    "Breathable short-sleeve shirts",
    "Long-sleeve shirts",
    "Warm fleece or hoodie",
    "Comfortable long trousers",
    "Light packable rain/wind jacket",
    "Swimwear",
    "Sleepwear",
    "Sportswear (if planned)",
    "Broken-in comfortable walking shoes",
    "Flip-flops or sandals for hotel and shower",
];

const TOILETRIES: &[&str] = &[
    "Toiletry bag with hanging hook",
    "Toothbrush and toothpaste",
    "Deodorant",
    "Shampoo, soap and conditioner in travel bottles",
    "Sunscreen (even off-season)",
    "Hand sanitizer and wet wipes",
    "Personal prescription medication (in the carry-on!)",
    "Doctor's letter in English for prescription medication",
    "Small first-aid kit (plasters, antiseptic, antibiotic ointment)",
    "Painkillers and ibuprofen",
    "Motion sickness pills for the flight or long drives",
    "Insect repellent (depending on region and season)",
];

const ESSENTIALS: &[&str] = &[
    "Sunglasses and a hat",
    "Small comfortable daypack",
    "Reusable water bottle",
    "Neck pillow, sleep mask and earplugs for the flight",
    "Compression bags to save suitcase space",
    "Separate bag for dirty laundry",
    "Pen for immigration forms on the plane",
    "Book, e-reader or magazine for flights and waits",
    "Small padlock for the suitcase or a locker",
];

/// Build the full default checklist, grouped into categories, with every
/// item not yet completed. Written as a single atomic batch on trip
/// creation so the checklist never appears partially populated.
pub fn default_checklist_items() -> Vec<NewChecklistItem> {
    let groups: [(&str, &[&str]); 5] = [
        (CATEGORY_DOCUMENTS, DOCUMENTS),
        (CATEGORY_ELECTRONICS, ELECTRONICS),
        (CATEGORY_CLOTHING, CLOTHING),
        (CATEGORY_TOILETRIES, TOILETRIES),
        (CATEGORY_ESSENTIALS, ESSENTIALS),
    ];

    groups
        .iter()
        .flat_map(|(category, texts)| {
            texts
                .iter()
                .map(move |text| NewChecklistItem::new(*text, *category))
        })
        .collect()
}
