//! Levy schedules for every state and union territory.
//!
//! Transcribed from the state RTO tariff sheets (November 2024 revision).
//! Rates are basis points of the ex-showroom price; flat levies are whole
//! rupees. Each array indexes the six price brackets in ascending order.

use super::Levy::{self, Flat, Rate};
use crate::fuel::FuelClass;
use crate::region::RtoState;

pub(super) struct StateSchedule {
    petrol: [Levy; 6],
    diesel: [Levy; 6],
    cng: [Levy; 6],
    electric: [Levy; 6],
}

impl StateSchedule {
    pub(super) fn class(&self, class: FuelClass) -> &[Levy; 6] {
        match class {
            FuelClass::Petrol => &self.petrol,
            FuelClass::Diesel => &self.diesel,
            FuelClass::Cng => &self.cng,
            FuelClass::Electric => &self.electric,
        }
    }
}

pub(super) fn schedule(state: RtoState) -> &'static StateSchedule {
    match state {
        RtoState::AndamanNicobar => &ANDAMAN_NICOBAR,
        RtoState::AndhraPradesh => &ANDHRA_PRADESH,
        RtoState::ArunachalPradesh => &ARUNACHAL_PRADESH,
        RtoState::Assam => &ASSAM,
        RtoState::Bihar => &BIHAR,
        RtoState::Chandigarh => &CHANDIGARH,
        RtoState::Chhattisgarh => &CHHATTISGARH,
        RtoState::DadraNagarHaveli => &DADRA_NAGAR_HAVELI,
        RtoState::Delhi => &DELHI,
        RtoState::Goa => &GOA,
        RtoState::Gujarat => &GUJARAT,
        RtoState::Haryana => &HARYANA,
        RtoState::HimachalPradesh => &HIMACHAL_PRADESH,
        RtoState::JammuKashmir => &JAMMU_KASHMIR,
        RtoState::Jharkhand => &JHARKHAND,
        RtoState::Karnataka => &KARNATAKA,
        RtoState::Kerala => &KERALA,
        RtoState::Lakshadweep => &LAKSHADWEEP,
        RtoState::MadhyaPradesh => &MADHYA_PRADESH,
        RtoState::Maharashtra => &MAHARASHTRA,
        RtoState::Manipur => &MANIPUR,
        RtoState::Meghalaya => &MEGHALAYA,
        RtoState::Mizoram => &MIZORAM,
        RtoState::Nagaland => &NAGALAND,
        RtoState::Odisha => &ODISHA,
        RtoState::Puducherry => &PUDUCHERRY,
        RtoState::Punjab => &PUNJAB,
        RtoState::Rajasthan => &RAJASTHAN,
        RtoState::Sikkim => &SIKKIM,
        RtoState::TamilNadu => &TAMIL_NADU,
        RtoState::Telangana => &TELANGANA,
        RtoState::Tripura => &TRIPURA,
        RtoState::Uttarakhand => &UTTARAKHAND,
        RtoState::UttarPradesh => &UTTAR_PRADESH,
        RtoState::WestBengal => &WEST_BENGAL,
    }
}

static ANDAMAN_NICOBAR: StateSchedule = StateSchedule {
    petrol: [Rate(1050), Rate(1050), Rate(1050), Rate(1050), Rate(1050), Rate(1050)],
    diesel: [Rate(1050), Rate(1050), Rate(1050), Rate(1050), Rate(1050), Rate(1050)],
    cng: [Rate(125), Rate(125), Rate(100), Rate(100), Rate(100), Rate(100)],
    electric: [Flat(9500), Flat(9500), Flat(16500), Flat(16500), Flat(29500), Flat(29500)],
};

static ANDHRA_PRADESH: StateSchedule = StateSchedule {
    petrol: [Rate(1300), Rate(1400), Rate(1700), Rate(1800), Rate(1800), Rate(1800)],
    diesel: [Rate(1300), Rate(1400), Rate(1700), Rate(1800), Rate(1800), Rate(1800)],
    cng: [Rate(1484), Rate(1484), Rate(1778), Rate(1778), Rate(1778), Rate(1778)],
    electric: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(25000), Flat(25000)],
};

static ARUNACHAL_PRADESH: StateSchedule = StateSchedule {
    petrol: [Rate(200), Rate(300), Rate(300), Rate(500), Rate(500), Rate(500)],
    diesel: [Rate(200), Rate(300), Rate(300), Rate(500), Rate(500), Rate(500)],
    cng: [Rate(384), Rate(384), Rate(478), Rate(478), Rate(478), Rate(478)],
    electric: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(25000), Flat(25000)],
};

static ASSAM: StateSchedule = StateSchedule {
    petrol: [Rate(500), Rate(600), Rate(800), Rate(1200), Rate(1400), Rate(1400)],
    diesel: [Rate(1090), Rate(1090), Rate(1075), Rate(1453), Rate(1471), Rate(1458)],
    cng: [Rate(1084), Rate(1084), Rate(1070), Rate(1070), Rate(1070), Rate(1070)],
    electric: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(25000), Flat(25000)],
};

static BIHAR: StateSchedule = StateSchedule {
    petrol: [Rate(1018), Rate(1017), Rate(942), Rate(800), Rate(782), Rate(795)],
    diesel: [Rate(900), Rate(900), Rate(1200), Rate(1200), Rate(1200), Rate(1200)],
    cng: [Rate(900), Rate(900), Rate(1200), Rate(1200), Rate(1200), Rate(1200)],
    electric: [Rate(962), Rate(962), Rate(1266), Rate(1248), Rate(1281), Rate(1251)],
};

static CHANDIGARH: StateSchedule = StateSchedule {
    petrol: [Rate(841), Rate(818), Rate(796), Rate(849), Rate(841), Rate(964)],
    diesel: [Rate(791), Rate(791), Rate(742), Rate(823), Rate(818), Rate(807)],
    cng: [Rate(860), Rate(860), Rate(708), Rate(708), Rate(708), Rate(708)],
    electric: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(25000), Flat(27150)],
};

static CHHATTISGARH: StateSchedule = StateSchedule {
    petrol: [Rate(900), Rate(1000), Rate(1000), Rate(1000), Rate(1000), Rate(1000)],
    diesel: [Rate(900), Rate(1000), Rate(1000), Rate(1000), Rate(1000), Rate(1000)],
    cng: [Rate(900), Rate(1000), Rate(1000), Rate(1000), Rate(1000), Rate(1000)],
    electric: [Rate(520), Rate(520), Rate(500), Rate(540), Rate(581), Rate(551)],
};

static DADRA_NAGAR_HAVELI: StateSchedule = StateSchedule {
    petrol: [Rate(1050), Rate(1050), Rate(1050), Rate(1050), Rate(1050), Rate(1050)],
    diesel: [Rate(340), Rate(340), Rate(375), Rate(350), Rate(371), Rate(358)],
    cng: [Rate(334), Rate(334), Rate(378), Rate(378), Rate(378), Rate(378)],
    electric: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(25000), Flat(25000)],
};

static DELHI: StateSchedule = StateSchedule {
    petrol: [Rate(400), Rate(700), Rate(1000), Rate(1000), Rate(1000), Rate(1000)],
    diesel: [Rate(500), Rate(870), Rate(1250), Rate(1250), Rate(1250), Rate(1250)],
    cng: [Rate(400), Rate(700), Rate(1000), Rate(1000), Rate(1000), Rate(1000)],
    electric: [Flat(9000), Flat(9000), Flat(10000), Flat(16000), Flat(29000), Flat(29000)],
};

static GOA: StateSchedule = StateSchedule {
    petrol: [Rate(900), Rate(900), Rate(1280), Rate(1678), Rate(1631), Rate(1708)],
    diesel: [Rate(900), Rate(900), Rate(1283), Rate(1678), Rate(1630), Rate(1700)],
    cng: [Rate(900), Rate(900), Rate(1283), Rate(1678), Rate(1631), Rate(1700)],
    electric: [Flat(5000), Flat(5000), Flat(27000), Flat(62000), Flat(75000), Flat(75000)],
};

static GUJARAT: StateSchedule = StateSchedule {
    petrol: [Rate(600), Rate(600), Rate(600), Rate(600), Rate(600), Rate(600)],
    diesel: [Rate(600), Rate(600), Rate(600), Rate(600), Rate(600), Rate(600)],
    cng: [Rate(600), Rate(600), Rate(600), Rate(600), Rate(600), Rate(600)],
    electric: [Rate(634), Rate(634), Rate(638), Rate(619), Rate(653), Rate(622)],
};

static HARYANA: StateSchedule = StateSchedule {
    petrol: [Rate(500), Rate(800), Rate(800), Rate(1000), Rate(1000), Rate(1000)],
    diesel: [Rate(500), Rate(800), Rate(800), Rate(1000), Rate(1000), Rate(1000)],
    cng: [Rate(400), Rate(640), Rate(640), Rate(800), Rate(800), Rate(800)],
    electric: [Rate(269), Rate(269), Rate(221), Rate(1048), Rate(1088), Rate(1051)],
};

static HIMACHAL_PRADESH: StateSchedule = StateSchedule {
    petrol: [Rate(660), Rate(660), Rate(650), Rate(750), Rate(750), Rate(750)],
    diesel: [Rate(660), Rate(660), Rate(770), Rate(770), Rate(770), Rate(770)],
    cng: [Rate(660), Rate(660), Rate(770), Rate(770), Rate(770), Rate(770)],
    electric: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(25000), Flat(25000)],
};

static JAMMU_KASHMIR: StateSchedule = StateSchedule {
    petrol: [Flat(1200), Flat(1200), Flat(1200), Flat(1200), Flat(1200), Flat(1200)],
    diesel: [Flat(1200), Flat(1200), Flat(1200), Flat(1200), Flat(1200), Flat(1200)],
    cng: [Rate(984), Rate(984), Rate(978), Rate(978), Rate(978), Rate(978)],
    electric: [Flat(1550), Flat(1550), Flat(12000), Flat(12000), Flat(25000), Flat(25000)],
};

static JHARKHAND: StateSchedule = StateSchedule {
    petrol: [Rate(800), Rate(765), Rate(981), Rate(919), Rate(909), Rate(956)],
    diesel: [Rate(900), Rate(900), Rate(900), Rate(912), Rate(971), Rate(919)],
    cng: [Rate(785), Rate(785), Rate(940), Rate(940), Rate(940), Rate(940)],
    electric: [Rate(961), Rate(961), Rate(916), Rate(948), Rate(981), Rate(951)],
};

static KARNATAKA: StateSchedule = StateSchedule {
    petrol: [Rate(1533), Rate(1613), Rate(1605), Rate(1913), Rate(1881), Rate(2109)],
    diesel: [Rate(1460), Rate(1566), Rate(1892), Rate(2000), Rate(2000), Rate(2000)],
    cng: [Rate(1501), Rate(1501), Rate(1785), Rate(1785), Rate(1785), Rate(1785)],
    electric: [Flat(6000), Flat(6000), Flat(13000), Flat(13000), Flat(11850), Flat(11530)],
};

static KERALA: StateSchedule = StateSchedule {
    petrol: [Rate(1050), Rate(1333), Rate(1328), Rate(1570), Rate(2270), Rate(2250)],
    diesel: [Rate(1320), Rate(1320), Rate(1500), Rate(2250), Rate(2200), Rate(2250)],
    cng: [Rate(1384), Rate(1384), Rate(1714), Rate(1714), Rate(1714), Rate(1714)],
    electric: [Rate(500), Rate(500), Rate(566), Rate(548), Rate(581), Rate(551)],
};

static LAKSHADWEEP: StateSchedule = StateSchedule {
    petrol: [Rate(1080), Rate(1300), Rate(1500), Rate(2250), Rate(2250), Rate(2250)],
    diesel: [Rate(1320), Rate(1320), Rate(1500), Rate(2250), Rate(2200), Rate(2250)],
    cng: [Rate(1384), Rate(1384), Rate(1714), Rate(1714), Rate(1714), Rate(1714)],
    electric: [Rate(500), Rate(500), Rate(566), Rate(548), Rate(581), Rate(551)],
};

static MADHYA_PRADESH: StateSchedule = StateSchedule {
    petrol: [Rate(860), Rate(800), Rate(1061), Rate(1456), Rate(1478), Rate(1456)],
    diesel: [Rate(1000), Rate(1000), Rate(1200), Rate(1600), Rate(1600), Rate(1600)],
    cng: [Rate(800), Rate(800), Rate(1000), Rate(1400), Rate(1400), Rate(1400)],
    electric: [Rate(462), Rate(462), Rate(466), Rate(448), Rate(481), Rate(451)],
};

static MAHARASHTRA: StateSchedule = StateSchedule {
    petrol: [Rate(1222), Rate(1176), Rate(1266), Rate(1383), Rate(1355), Rate(1331)],
    diesel: [Rate(1300), Rate(1300), Rate(1400), Rate(1500), Rate(1500), Rate(1500)],
    cng: [Rate(700), Rate(700), Rate(800), Rate(900), Rate(900), Rate(900)],
    electric: [Flat(3060), Flat(3060), Flat(5100), Flat(12240), Flat(25500), Flat(25500)],
};

static MANIPUR: StateSchedule = StateSchedule {
    petrol: [Rate(580), Rate(666), Rate(761), Rate(856), Rate(841), Rate(856)],
    diesel: [Rate(500), Rate(600), Rate(700), Rate(800), Rate(800), Rate(800)],
    cng: [Rate(500), Rate(600), Rate(800), Rate(800), Rate(800), Rate(800)],
    electric: [Rate(542), Rate(542), Rate(706), Rate(688), Rate(721), Rate(700)],
};

static MEGHALAYA: StateSchedule = StateSchedule {
    petrol: [Rate(682), Rate(666), Rate(660), Rate(1049), Rate(1078), Rate(1056)],
    diesel: [Rate(600), Rate(600), Rate(600), Rate(1100), Rate(1100), Rate(1100)],
    cng: [Rate(684), Rate(684), Rate(878), Rate(878), Rate(878), Rate(878)],
    electric: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(25000), Flat(25000)],
};

static MIZORAM: StateSchedule = StateSchedule {
    petrol: [Rate(682), Rate(677), Rate(666), Rate(649), Rate(678), Rate(656)],
    diesel: [Rate(600), Rate(600), Rate(600), Rate(600), Rate(600), Rate(600)],
    cng: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(12000), Flat(12000)],
    electric: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(25000), Flat(25000)],
};

static NAGALAND: StateSchedule = StateSchedule {
    petrol: [Rate(600), Rate(600), Rate(600), Rate(600), Rate(600), Rate(600)],
    diesel: [Rate(600), Rate(600), Rate(600), Rate(600), Rate(600), Rate(600)],
    cng: [Rate(684), Rate(684), Rate(678), Rate(678), Rate(678), Rate(678)],
    electric: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(25000), Flat(25000)],
};

static ODISHA: StateSchedule = StateSchedule {
    petrol: [Rate(650), Rate(830), Rate(1000), Rate(1000), Rate(1000), Rate(1050)],
    diesel: [Rate(840), Rate(840), Rate(1020), Rate(1050), Rate(1000), Rate(1000)],
    cng: [Rate(884), Rate(884), Rate(1000), Rate(1000), Rate(1000), Rate(1000)],
    electric: [Rate(164), Rate(164), Rate(164), Rate(1200), Rate(2500), Rate(2500)],
};

static PUDUCHERRY: StateSchedule = StateSchedule {
    petrol: [Rate(1317), Rate(477), Rate(761), Rate(749), Rate(778), Rate(756)],
    diesel: [Rate(400), Rate(400), Rate(700), Rate(700), Rate(700), Rate(700)],
    cng: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(12000), Flat(12000)],
    electric: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(25000), Flat(25000)],
};

static PUNJAB: StateSchedule = StateSchedule {
    petrol: [Rate(890), Rate(875), Rate(836), Rate(849), Rate(869), Rate(856)],
    diesel: [Rate(1050), Rate(1050), Rate(1050), Rate(1300), Rate(1400), Rate(1400)],
    cng: [Rate(1050), Rate(1050), Rate(1300), Rate(1400), Rate(1400), Rate(1400)],
    electric: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(25000), Flat(25000)],
};

static RAJASTHAN: StateSchedule = StateSchedule {
    petrol: [Rate(982), Rate(977), Rate(961), Rate(1049), Rate(1269), Rate(1056)],
    diesel: [Rate(1000), Rate(1012), Rate(1012), Rate(1012), Rate(1012), Rate(1012)],
    cng: [Rate(560), Rate(560), Rate(560), Rate(560), Rate(560), Rate(560)],
    electric: [Flat(2200), Flat(2200), Flat(12000), Flat(12000), Flat(25000), Flat(25000)],
};

static SIKKIM: StateSchedule = StateSchedule {
    petrol: [Flat(16000), Flat(16000), Flat(16000), Flat(16000), Flat(16000), Flat(16000)],
    diesel: [Flat(16000), Flat(16000), Flat(16000), Flat(16000), Flat(16000), Flat(16000)],
    cng: [Flat(1600), Flat(1600), Flat(1600), Flat(1600), Flat(1600), Flat(1600)],
    electric: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(25000), Flat(25000)],
};

static TAMIL_NADU: StateSchedule = StateSchedule {
    petrol: [Rate(1200), Rate(1300), Rate(1800), Rate(2000), Rate(2000), Rate(2000)],
    diesel: [Rate(1200), Rate(1300), Rate(1800), Rate(2000), Rate(2000), Rate(2000)],
    cng: [Rate(1200), Rate(1300), Rate(1800), Rate(2000), Rate(2000), Rate(2000)],
    electric: [Flat(6500), Flat(6500), Flat(13500), Flat(13500), Flat(26500), Flat(26500)],
};

static TELANGANA: StateSchedule = StateSchedule {
    petrol: [Rate(1382), Rate(1470), Rate(1761), Rate(1850), Rate(1869), Rate(1856)],
    diesel: [Rate(1340), Rate(1420), Rate(1700), Rate(1850), Rate(1800), Rate(1800)],
    cng: [Rate(1484), Rate(1484), Rate(1778), Rate(1778), Rate(1778), Rate(1778)],
    electric: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(25000), Flat(25000)],
};

static TRIPURA: StateSchedule = StateSchedule {
    petrol: [Rate(300), Rate(350), Rate(400), Rate(400), Rate(400), Rate(400)],
    diesel: [Rate(300), Rate(350), Rate(400), Rate(400), Rate(400), Rate(400)],
    cng: [Rate(300), Rate(150), Rate(400), Rate(400), Rate(400), Rate(400)],
    electric: [Rate(320), Rate(320), Rate(366), Rate(348), Rate(381), Rate(351)],
};

static UTTARAKHAND: StateSchedule = StateSchedule {
    petrol: [Rate(800), Rate(900), Rate(1000), Rate(1000), Rate(1000), Rate(1000)],
    diesel: [Rate(800), Rate(900), Rate(1000), Rate(1000), Rate(1000), Rate(1000)],
    cng: [Rate(800), Rate(900), Rate(1000), Rate(1000), Rate(1000), Rate(1000)],
    electric: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(25000), Flat(25000)],
};

static UTTAR_PRADESH: StateSchedule = StateSchedule {
    petrol: [Rate(800), Rate(800), Rate(1000), Rate(1000), Rate(1000), Rate(1000)],
    diesel: [Rate(700), Rate(700), Rate(700), Rate(700), Rate(700), Rate(700)],
    cng: [Rate(800), Rate(800), Rate(1000), Rate(1000), Rate(1000), Rate(1000)],
    electric: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(25000), Flat(25000)],
};

static WEST_BENGAL: StateSchedule = StateSchedule {
    petrol: [Rate(1570), Rate(1000), Rate(1000), Rate(1000), Rate(1000), Rate(1000)],
    diesel: [Rate(1370), Rate(1000), Rate(1000), Rate(1000), Rate(1000), Rate(1000)],
    cng: [Rate(1278), Rate(930), Rate(930), Rate(930), Rate(930), Rate(960)],
    electric: [Flat(5000), Flat(5000), Flat(12000), Flat(12000), Flat(25000), Flat(25000)],
};
