/// Selectable business locations for the input form: Indian cities plus
/// states and union territories, pre-sorted and deduplicated. Selection
/// only — the chosen name travels through reports as a display label and
/// never feeds the ROI numbers.
pub const LOCATIONS: &[&str] = &[
    "Agartala", "Agra", "Ahmedabad", "Ahmednagar", "Aizawl", "Ajmer", "Akola", "Alappuzha",
    "Aligarh", "Allahabad", "Alwar", "Ambala", "Amravati", "Amritsar", "Anand",
    "Anantapur", "Andaman and Nicobar Islands", "Andhra Pradesh", "Arunachal Pradesh",
    "Asansol", "Assam", "Aurangabad", "Azamgarh", "Bangalore", "Baran", "Bareilly",
    "Bathinda", "Begusarai", "Belagavi", "Bellary", "Berhampur", "Bhagalpur", "Bharatpur",
    "Bharuch", "Bhavnagar", "Bhilai", "Bhilwara", "Bhopal", "Bhubaneswar", "Bhuj", "Bidar",
    "Bihar", "Bikaner", "Bilaspur", "Bokaro", "Chandigarh", "Chandrapur", "Chennai",
    "Chhattisgarh", "Chhindwara", "Chittoor", "Coimbatore", "Cuttack",
    "Dadra and Nagar Haveli and Daman and Diu", "Daman", "Darbhanga", "Darjeeling",
    "Davanagere", "Dehradun", "Delhi", "Dewas", "Dhanbad", "Dhar", "Dhule", "Dibrugarh",
    "Dindigul", "Dispur", "Durg", "Durgapur", "Erode", "Etawah", "Faizabad", "Faridabad",
    "Farrukhabad", "Fatehpur", "Firozabad", "Gandhinagar", "Gaya", "Ghaziabad", "Ghazipur",
    "Goa", "Gorakhpur", "Greater Noida", "Gujarat", "Gulbarga", "Guna", "Guntur",
    "Gurgaon", "Guwahati", "Gwalior", "Hajipur", "Haldia", "Haldwani", "Haridwar",
    "Haryana", "Hassan", "Himachal Pradesh", "Hisar", "Hosur", "Hubli", "Hyderabad",
    "Ichalkaranji", "Imphal", "Indore", "Itanagar", "Jabalpur", "Jagdalpur", "Jagraon",
    "Jaipur", "Jalandhar", "Jalgaon", "Jammu", "Jammu and Kashmir", "Jamnagar",
    "Jamshedpur", "Jhansi", "Jharkhand", "Jhunjhunu", "Jodhpur", "Junagadh", "Kadapa",
    "Kaithal", "Kakinada", "Kalaburagi", "Kalyan", "Kanchipuram", "Kannur", "Kanpur",
    "Kapurthala", "Karimnagar", "Karnal", "Karnataka", "Karur", "Katni", "Kerala",
    "Kharagpur", "Kochi", "Kolhapur", "Kolkata", "Kollam", "Korba", "Kota", "Kottayam",
    "Kozhikode", "Krishnanagar", "Kurnool", "Ladakh", "Lakshadweep", "Latur", "Loni",
    "Lucknow", "Ludhiana", "Madhya Pradesh", "Madurai", "Maharashtra", "Maheshtala",
    "Malda", "Malegaon", "Mangalore", "Manipur", "Mathura", "Meerut", "Meghalaya",
    "Mirzapur", "Mizoram", "Moradabad", "Morena", "Mumbai", "Muzaffarnagar", "Muzaffarpur",
    "Mysore", "Nadiad", "Nagaland", "Nagapattinam", "Nagercoil", "Nagpur", "Nanded",
    "Nashik", "Navi Mumbai", "Neemuch", "Nellore", "Nizamabad", "Noida", "Odisha",
    "Ongole", "Ooty", "Orai", "Palakkad", "Palanpur", "Pali", "Panaji", "Panchkula",
    "Panipat", "Parbhani", "Pathankot", "Patiala", "Patna", "Pimpri-Chinchwad",
    "Porbandar", "Prayagraj", "Puducherry", "Pune", "Punjab", "Puri", "Raebareli",
    "Raichur", "Raigarh", "Raipur", "Rajahmundry", "Rajasthan", "Rajkot", "Ranchi",
    "Ratlam", "Rewa", "Rewari", "Rohtak", "Roorkee", "Rourkela", "Sagar", "Saharanpur",
    "Salem", "Sambalpur", "Sangli", "Sangrur", "Satara", "Satna", "Secunderabad",
    "Serampore", "Shillong", "Shimla", "Shivpuri", "Sikar", "Sikkim", "Silchar",
    "Siliguri", "Solapur", "Sonipat", "Srinagar", "Surat", "Tamil Nadu", "Telangana",
    "Tenali", "Tezpur", "Thane", "Thanjavur", "Thiruvananthapuram", "Thoothukudi",
    "Thrissur", "Tinsukia", "Tiruchirappalli", "Tirunelveli", "Tirupati", "Tiruppur",
    "Tiruvannamalai", "Tripura", "Udaipur", "Udupi", "Ujjain", "Ulhasnagar", "Una",
    "Unnao", "Uttar Pradesh", "Uttarakhand", "Vadodara", "Valsad", "Varanasi",
    "Vasai-Virar", "Vellore", "Vidisha", "Vijayawada", "Viluppuram", "Virar",
    "Visakhapatnam", "Warangal", "Wardha", "West Bengal", "Yamunanagar",
];
