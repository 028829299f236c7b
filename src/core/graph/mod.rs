pub mod road_network;
