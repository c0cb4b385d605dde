//! Static city table.
//!
//! Covers the metros and the RTO cities the quotation UI offers; `popular`
//! marks the entries surfaced first in city pickers.

use super::CityRecord;
use crate::region::RtoState;

const fn city(name: &'static str, state: RtoState, popular: bool) -> CityRecord {
    CityRecord { city: name, state, popular }
}

pub(super) static CITIES: [CityRecord; 99] = [
    // Delhi NCR
    city("Delhi", RtoState::Delhi, true),
    city("New Delhi", RtoState::Delhi, true),
    city("Noida", RtoState::UttarPradesh, true),
    city("Greater Noida", RtoState::UttarPradesh, false),
    city("Ghaziabad", RtoState::UttarPradesh, true),
    city("Gurgaon", RtoState::Haryana, true),
    city("Gurugram", RtoState::Haryana, true),
    city("Faridabad", RtoState::Haryana, true),
    // Maharashtra
    city("Mumbai", RtoState::Maharashtra, true),
    city("Navi Mumbai", RtoState::Maharashtra, false),
    city("Pune", RtoState::Maharashtra, true),
    city("Nagpur", RtoState::Maharashtra, true),
    city("Nashik", RtoState::Maharashtra, false),
    city("Thane", RtoState::Maharashtra, false),
    city("Aurangabad", RtoState::Maharashtra, false),
    city("Solapur", RtoState::Maharashtra, false),
    city("Kolhapur", RtoState::Maharashtra, false),
    // Karnataka
    city("Bangalore", RtoState::Karnataka, true),
    city("Bengaluru", RtoState::Karnataka, true),
    city("Mysore", RtoState::Karnataka, false),
    city("Mangalore", RtoState::Karnataka, false),
    city("Hubli", RtoState::Karnataka, false),
    city("Belgaum", RtoState::Karnataka, false),
    // Tamil Nadu
    city("Chennai", RtoState::TamilNadu, true),
    city("Coimbatore", RtoState::TamilNadu, false),
    city("Madurai", RtoState::TamilNadu, false),
    city("Tiruchirappalli", RtoState::TamilNadu, false),
    city("Salem", RtoState::TamilNadu, false),
    city("Tirunelveli", RtoState::TamilNadu, false),
    // Telangana
    city("Hyderabad", RtoState::Telangana, true),
    city("Warangal", RtoState::Telangana, false),
    city("Nizamabad", RtoState::Telangana, false),
    // Andhra Pradesh
    city("Visakhapatnam", RtoState::AndhraPradesh, false),
    city("Vijayawada", RtoState::AndhraPradesh, false),
    city("Guntur", RtoState::AndhraPradesh, false),
    city("Tirupati", RtoState::AndhraPradesh, false),
    // West Bengal
    city("Kolkata", RtoState::WestBengal, true),
    city("Howrah", RtoState::WestBengal, false),
    city("Durgapur", RtoState::WestBengal, false),
    city("Asansol", RtoState::WestBengal, false),
    city("Siliguri", RtoState::WestBengal, false),
    // Gujarat
    city("Ahmedabad", RtoState::Gujarat, true),
    city("Surat", RtoState::Gujarat, true),
    city("Vadodara", RtoState::Gujarat, false),
    city("Rajkot", RtoState::Gujarat, false),
    city("Gandhinagar", RtoState::Gujarat, false),
    // Rajasthan
    city("Jaipur", RtoState::Rajasthan, true),
    city("Jodhpur", RtoState::Rajasthan, false),
    city("Udaipur", RtoState::Rajasthan, false),
    city("Kota", RtoState::Rajasthan, false),
    city("Ajmer", RtoState::Rajasthan, false),
    // Uttar Pradesh
    city("Lucknow", RtoState::UttarPradesh, true),
    city("Kanpur", RtoState::UttarPradesh, false),
    city("Agra", RtoState::UttarPradesh, false),
    city("Varanasi", RtoState::UttarPradesh, false),
    city("Meerut", RtoState::UttarPradesh, false),
    city("Allahabad", RtoState::UttarPradesh, false),
    city("Prayagraj", RtoState::UttarPradesh, false),
    // Madhya Pradesh
    city("Indore", RtoState::MadhyaPradesh, true),
    city("Bhopal", RtoState::MadhyaPradesh, true),
    city("Jabalpur", RtoState::MadhyaPradesh, false),
    city("Gwalior", RtoState::MadhyaPradesh, false),
    city("Ujjain", RtoState::MadhyaPradesh, false),
    // Punjab and Chandigarh
    city("Chandigarh", RtoState::Chandigarh, true),
    city("Ludhiana", RtoState::Punjab, false),
    city("Amritsar", RtoState::Punjab, false),
    city("Jalandhar", RtoState::Punjab, false),
    city("Patiala", RtoState::Punjab, false),
    // Haryana beyond NCR
    city("Panipat", RtoState::Haryana, false),
    city("Ambala", RtoState::Haryana, false),
    city("Rohtak", RtoState::Haryana, false),
    city("Hisar", RtoState::Haryana, false),
    // Kerala
    city("Kochi", RtoState::Kerala, true),
    city("Thiruvananthapuram", RtoState::Kerala, false),
    city("Kozhikode", RtoState::Kerala, false),
    city("Thrissur", RtoState::Kerala, false),
    // Bihar
    city("Patna", RtoState::Bihar, true),
    city("Gaya", RtoState::Bihar, false),
    city("Bhagalpur", RtoState::Bihar, false),
    city("Muzaffarpur", RtoState::Bihar, false),
    // Odisha
    city("Bhubaneswar", RtoState::Odisha, true),
    city("Cuttack", RtoState::Odisha, false),
    city("Rourkela", RtoState::Odisha, false),
    // Jharkhand
    city("Ranchi", RtoState::Jharkhand, false),
    city("Jamshedpur", RtoState::Jharkhand, false),
    city("Dhanbad", RtoState::Jharkhand, false),
    // Chhattisgarh
    city("Raipur", RtoState::Chhattisgarh, false),
    city("Bhilai", RtoState::Chhattisgarh, false),
    // Uttarakhand
    city("Dehradun", RtoState::Uttarakhand, false),
    city("Haridwar", RtoState::Uttarakhand, false),
    // Himachal Pradesh
    city("Shimla", RtoState::HimachalPradesh, false),
    city("Manali", RtoState::HimachalPradesh, false),
    // Jammu & Kashmir
    city("Srinagar", RtoState::JammuKashmir, false),
    city("Jammu", RtoState::JammuKashmir, false),
    // Assam
    city("Guwahati", RtoState::Assam, false),
    city("Dibrugarh", RtoState::Assam, false),
    // Goa
    city("Panaji", RtoState::Goa, false),
    city("Margao", RtoState::Goa, false),
    // Puducherry
    city("Puducherry", RtoState::Puducherry, false),
];
